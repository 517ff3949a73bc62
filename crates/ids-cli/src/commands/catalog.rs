//! Catalog command implementation.

use ids_seed::Catalog;

/// Prints the quickstart catalog as JSON.
pub fn run_catalog() -> crate::CliResult<i32> {
    let json = Catalog::quickstart().to_json_pretty()?;
    println!("{json}");
    Ok(0)
}
