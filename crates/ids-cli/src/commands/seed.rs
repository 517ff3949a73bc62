//! Seed command implementation.

use ids_core::Config;
use ids_model::EntityKind;
use ids_seed::{Catalog, SeedSummary, seed};
use ids_storage::InMemoryConfigRepository;
use ids_storage_sql::PgConfigRepository;

use crate::cli::SeedArgs;
use crate::output::{info, success, warning};

/// Runs the seed command.
pub async fn run_seed(
    args: SeedArgs,
    config: &Config,
    database_url: Option<&str>,
) -> crate::CliResult<i32> {
    let catalog = match &args.catalog {
        Some(path) => {
            info(&format!("Loading catalog from '{}'...", path.display()));
            Catalog::from_json_file(path)?
        }
        None => Catalog::quickstart(),
    };

    let summary = if args.in_memory {
        warning("Seeding an in-memory store; nothing will be persisted.");
        seed(&catalog, &InMemoryConfigRepository::new()).await?
    } else {
        let pool = super::connect(config, database_url).await?;
        seed(&catalog, &PgConfigRepository::new(pool)).await?
    };

    print_summary(&summary);
    Ok(summary.exit_code())
}

fn print_summary(summary: &SeedSummary) {
    println!();
    success(&summary.to_string());
    for kind in EntityKind::ALL {
        let inserted = summary.inserted(kind);
        let label = format!("{kind}:");
        if inserted.is_empty() {
            println!("  {label:<19} 0 inserted, {} skipped", summary.skipped(kind));
        } else {
            println!(
                "  {label:<19} {} inserted ({}), {} skipped",
                inserted.len(),
                inserted.join(", "),
                summary.skipped(kind)
            );
        }
    }
}
