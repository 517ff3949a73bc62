//! Configuration seeding tests.

use std::collections::HashSet;
use std::sync::Arc;

use ids_model::{ApiResource, ApiScope, Client, ConfigEntity, EntityKind, IdentityResource};
use ids_seed::{Catalog, ConfigSeeder, seed};
use ids_storage::{ConfigRepository, InMemoryConfigRepository};
use proptest::prelude::*;

use crate::common::{init_tracing, key_sets, seeded_repository};

fn set(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

#[tokio::test]
async fn quickstart_into_empty_store() {
    init_tracing();
    let repo = seeded_repository().await;

    assert_eq!(
        key_sets(&repo).await,
        vec![
            set(&["client", "mvc"]),
            set(&["openid", "profile"]),
            set(&["api1"]),
            set(&["api1"]),
        ]
    );

    let mvc = repo.get(EntityKind::Client, "mvc").await.unwrap();
    assert_eq!(mvc.body["redirect_uris"][0], "https://localhost:5002/signin-oidc");
    assert_eq!(mvc.body["secrets"][0]["value"], "K7gNU3sdo+OL0wNhqoVWhr3g6s1xYv72ol/pe/Unols=");
}

#[tokio::test]
async fn second_run_inserts_nothing() {
    init_tracing();
    let repo = seeded_repository().await;
    let before = key_sets(&repo).await;

    let summary = seed(&Catalog::quickstart(), &repo).await.unwrap();

    assert!(summary.is_noop());
    assert_eq!(summary.total_skipped(), 6);
    assert_eq!(summary.exit_code(), 0);
    assert_eq!(key_sets(&repo).await, before);
}

#[tokio::test]
async fn existing_mvc_client_only_adds_client() {
    init_tracing();
    let repo = InMemoryConfigRepository::new();
    repo.insert_all(EntityKind::Client, vec![Client::new("mvc").to_record().unwrap()])
        .await
        .unwrap();
    let catalog = Catalog {
        clients: vec![Client::new("mvc"), Client::new("client")],
        ..Catalog::new()
    };

    let first = seed(&catalog, &repo).await.unwrap();
    let second = seed(&catalog, &repo).await.unwrap();

    assert_eq!(first.inserted(EntityKind::Client), ["client"]);
    assert!(second.is_noop());
    assert_eq!(
        repo.list_keys(EntityKind::Client).await.unwrap(),
        set(&["mvc", "client"])
    );
}

#[tokio::test]
async fn partially_seeded_store_is_completed() {
    init_tracing();
    let repo = InMemoryConfigRepository::new();
    repo.insert_all(
        EntityKind::IdentityResource,
        vec![IdentityResource::openid().to_record().unwrap()],
    )
    .await
    .unwrap();
    repo.insert_all(
        EntityKind::ApiScope,
        vec![ApiScope::new("api1", "My API").to_record().unwrap()],
    )
    .await
    .unwrap();

    let summary = seed(&Catalog::quickstart(), &repo).await.unwrap();

    assert_eq!(summary.inserted(EntityKind::IdentityResource), ["profile"]);
    assert_eq!(summary.inserted(EntityKind::ApiResource), ["api1"]);
    assert!(summary.inserted(EntityKind::ApiScope).is_empty());
    assert_eq!(summary.total_inserted(), 4);
}

#[tokio::test]
async fn json_catalog_is_seeded() {
    init_tracing();
    let json = Catalog {
        api_resources: vec![ApiResource::new("orders", "Orders API").with_scope("orders.read")],
        api_scopes: vec![ApiScope::new("orders.read", "Read orders")],
        ..Catalog::new()
    }
    .to_json_pretty()
    .unwrap();
    let catalog = Catalog::from_json(&json).unwrap();
    let repo = Arc::new(InMemoryConfigRepository::new());

    ConfigSeeder::new(repo.clone()).seed(&catalog).await.unwrap();

    assert_eq!(repo.keys(EntityKind::ApiResource).await, vec!["orders"]);
    assert_eq!(repo.keys(EntityKind::ApiScope).await, vec!["orders.read"]);
    assert!(repo.keys(EntityKind::Client).await.is_empty());
}

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{1,2}", 0..6)
}

proptest! {
    #[test]
    fn seeding_converges_and_is_idempotent(
        existing in names(),
        desired in names(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let repo = InMemoryConfigRepository::new();
            let stored: HashSet<String> = existing.iter().cloned().collect();
            let records = stored
                .iter()
                .map(|name| ApiScope::new(name.as_str(), name.as_str()).to_record().unwrap())
                .collect();
            repo.insert_all(EntityKind::ApiScope, records).await.unwrap();

            let catalog = Catalog {
                api_scopes: desired.iter().map(|n| ApiScope::new(n.as_str(), "desired")).collect(),
                ..Catalog::new()
            };

            let first = seed(&catalog, &repo).await.unwrap();
            let after_first = repo.list_keys(EntityKind::ApiScope).await.unwrap();
            let second = seed(&catalog, &repo).await.unwrap();
            let after_second = repo.list_keys(EntityKind::ApiScope).await.unwrap();

            let wanted: HashSet<String> = desired.iter().cloned().collect();
            let expected: HashSet<String> = stored.union(&wanted).cloned().collect();
            let inserted: HashSet<String> =
                first.inserted(EntityKind::ApiScope).iter().cloned().collect();

            prop_assert_eq!(&after_first, &expected);
            prop_assert_eq!(&after_second, &expected);
            prop_assert!(second.is_noop());
            prop_assert_eq!(first.inserted(EntityKind::ApiScope).len(), inserted.len());
            prop_assert_eq!(inserted, wanted.difference(&stored).cloned().collect::<HashSet<_>>());
            Ok(())
        })?;
    }
}
