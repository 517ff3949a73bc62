//! Activate command implementation.

use std::sync::Arc;

use ids_account::{RegisterForm, RegistrationWorkflow, ROOT_KEY};
use ids_core::Config;
use ids_storage_sql::PgCredentialStore;

use crate::cli::ActivateArgs;
use crate::output::{error, success};

/// Runs the activate command.
pub async fn run_activate(
    args: ActivateArgs,
    config: &Config,
    database_url: Option<&str>,
) -> crate::CliResult<i32> {
    let pool = super::connect(config, database_url).await?;
    let store = PgCredentialStore::new(
        pool,
        super::password_policy(config),
        super::password_hasher(),
    );
    let workflow = RegistrationWorkflow::new(Arc::new(store));

    let form = RegisterForm::new(args.username, args.password);
    let result = workflow.register_form(&form).await?;

    if result.account_created {
        success(&format!("Account '{}' activated", form.username));
        return Ok(0);
    }

    for (field, messages) in result.errors.iter() {
        for message in messages {
            if field == ROOT_KEY {
                error(message);
            } else {
                error(&format!("{field}: {message}"));
            }
        }
    }
    Ok(1)
}
