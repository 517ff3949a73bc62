//! `PostgreSQL` store tests. These start a container and need Docker:
//! `cargo test -p ids-integration-tests -- --ignored`.

use std::sync::Arc;

use ids_account::{RegisterForm, RegistrationOutcome, RegistrationWorkflow};
use ids_model::{Client, ConfigEntity, EntityKind};
use ids_seed::{Catalog, seed};
use ids_storage::{
    ConfigRepository, CredentialStore, PasswordHasherService, PasswordPolicy,
    password::HashParams,
};
use ids_storage_sql::{PgConfigRepository, PgCredentialStore};

use crate::common::{PgEnv, key_sets};

fn credential_store(env: &PgEnv) -> PgCredentialStore {
    PgCredentialStore::new(
        env.pool.clone(),
        PasswordPolicy::default(),
        PasswordHasherService::new(HashParams::for_testing()),
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn seeds_postgres_idempotently() -> anyhow::Result<()> {
    let env = PgEnv::new().await?;
    let repo = PgConfigRepository::new(env.pool.clone());

    let first = seed(&Catalog::quickstart(), &repo).await?;
    let after_first = key_sets(&repo).await;
    let second = seed(&Catalog::quickstart(), &repo).await?;

    assert_eq!(first.total_inserted(), 6);
    assert!(second.is_noop());
    assert_eq!(key_sets(&repo).await, after_first);
    Ok(())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn duplicate_key_rolls_back_whole_batch() -> anyhow::Result<()> {
    let env = PgEnv::new().await?;
    let repo = PgConfigRepository::new(env.pool.clone());
    repo.insert_all(EntityKind::Client, vec![Client::new("mvc").to_record()?])
        .await?;

    let err = repo
        .insert_all(
            EntityKind::Client,
            vec![Client::new("client").to_record()?, Client::new("mvc").to_record()?],
        )
        .await
        .unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(repo.list_keys(EntityKind::Client).await?.len(), 1);
    Ok(())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn activates_provisioned_account() -> anyhow::Result<()> {
    let env = PgEnv::new().await?;
    let id = env.provision("alice").await?;
    let store = Arc::new(credential_store(&env));
    let workflow = RegistrationWorkflow::new(store.clone());

    let result = workflow
        .register_form(&RegisterForm::new("alice", "Pa$$w0rd"))
        .await?;
    let again = workflow
        .register_form(&RegisterForm::new("alice", "Pa$$w0rd"))
        .await?;
    let ghost = workflow
        .register_form(&RegisterForm::new("ghost", "Pa$$w0rd"))
        .await?;

    assert!(result.account_created);
    assert_eq!(again.outcome, RegistrationOutcome::CredentialAttachFailed);
    assert_eq!(ghost.outcome, RegistrationOutcome::UnknownUsername);

    let stored = store.find_by_username("alice").await?.expect("account exists");
    assert_eq!(stored.id, id);
    assert!(stored.activated);
    let hash = stored.password.expect("password attached").secret_data;
    assert!(PasswordHasherService::default().verify("Pa$$w0rd", &hash)?);
    Ok(())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn stale_finalize_is_rejected() -> anyhow::Result<()> {
    let env = PgEnv::new().await?;
    env.provision("bob").await?;
    let store = credential_store(&env);

    let mut first = store.find_by_username("bob").await?.expect("account exists");
    let mut second = first.clone();
    store.attach_password(&mut first, "Pa$$w0rd").await?;
    store.attach_password(&mut second, "0th3r!Pw").await?;

    assert!(store.finalize_account(&first).await?.is_success());
    assert!(!store.finalize_account(&second).await?.is_success());
    Ok(())
}
