//! Account activation tests.

use ids_account::{RegisterForm, RegistrationOutcome, ValidationErrors, UNKNOWN_USERNAME};
use ids_storage::credential::ALREADY_HAS_PASSWORD;
use proptest::prelude::*;

use crate::common::{CallCounts, RecordingStore, init_tracing, workflow};

#[tokio::test]
async fn ghost_username_reports_single_form_error() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice"]).await;

    let result = workflow(&store)
        .register(&RegisterForm::new("ghost", "x"), true, ValidationErrors::new())
        .await
        .unwrap();

    assert!(!result.account_created);
    assert_eq!(result.outcome, RegistrationOutcome::UnknownUsername);
    assert_eq!(result.errors, ValidationErrors::root([UNKNOWN_USERNAME]));
    assert_eq!(
        store.calls(),
        CallCounts {
            find: 1,
            attach: 0,
            finalize: 0
        }
    );
}

#[tokio::test]
async fn weak_password_is_rejected_before_finalize() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice"]).await;

    let result = workflow(&store)
        .register_form(&RegisterForm::new("alice", "password"))
        .await
        .unwrap();

    assert!(!result.account_created);
    assert_eq!(result.outcome, RegistrationOutcome::CredentialAttachFailed);
    assert_eq!(
        result.errors.form_level(),
        [
            "Passwords must have at least one non alphanumeric character.",
            "Passwords must have at least one digit ('0'-'9').",
            "Passwords must have at least one uppercase ('A'-'Z').",
        ]
    );
    assert_eq!(store.calls().finalize, 0);
    assert!(!store.inner.get("alice").await.unwrap().activated);
}

#[tokio::test]
async fn strong_password_activates_account() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice"]).await;

    let result = workflow(&store)
        .register_form(&RegisterForm::new("alice", "Pa$$w0rd").with_return_url("/home"))
        .await
        .unwrap();

    assert!(result.account_created);
    assert!(result.errors.is_empty());
    assert_eq!(
        store.calls(),
        CallCounts {
            find: 1,
            attach: 1,
            finalize: 1
        }
    );

    let stored = store.inner.get("alice").await.unwrap();
    assert!(stored.activated);
    assert!(store.inner.check_password("alice", "Pa$$w0rd").await.unwrap());
}

#[tokio::test]
async fn second_activation_is_rejected() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice"]).await;
    let workflow = workflow(&store);

    workflow
        .register_form(&RegisterForm::new("alice", "Pa$$w0rd"))
        .await
        .unwrap();
    let again = workflow
        .register_form(&RegisterForm::new("alice", "N3w!pass"))
        .await
        .unwrap();

    assert!(!again.account_created);
    assert_eq!(again.errors.form_level(), [ALREADY_HAS_PASSWORD]);
    assert!(store.inner.check_password("alice", "Pa$$w0rd").await.unwrap());
}

#[tokio::test]
async fn concurrent_activations_create_account_once() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice"]).await;

    let mut handles = Vec::new();
    for password in ["Pa$$w0rd", "0th3r!Pw", "Thrd#pw9"] {
        let workflow = workflow(&store);
        handles.push(tokio::spawn(async move {
            workflow
                .register_form(&RegisterForm::new("alice", password))
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        if result.account_created {
            created += 1;
        } else {
            assert!(matches!(
                result.outcome,
                RegistrationOutcome::CredentialAttachFailed | RegistrationOutcome::FinalizeFailed
            ));
        }
    }

    assert_eq!(created, 1);
    assert!(store.inner.get("alice").await.unwrap().activated);
}

#[tokio::test]
async fn independent_usernames_activate_in_parallel() {
    init_tracing();
    let store = RecordingStore::with_accounts(&["alice", "bob"]).await;

    let (wf_a, wf_b) = (workflow(&store), workflow(&store));
    let (form_a, form_b) = (
        RegisterForm::new("alice", "Pa$$w0rd"),
        RegisterForm::new("bob", "B0b!pass"),
    );
    let (a, b) = tokio::join!(wf_a.register_form(&form_a), wf_b.register_form(&form_b));

    assert!(a.unwrap().account_created);
    assert!(b.unwrap().account_created);
}

proptest! {
    #[test]
    fn invalid_form_is_passed_through_untouched(
        username in ".{0,16}",
        password in ".{0,16}",
        messages in proptest::collection::vec(("[A-Za-z]{0,8}", ".{1,24}"), 0..4),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let mut upstream = ValidationErrors::new();
        for (field, message) in &messages {
            upstream.add(field.as_str(), message.as_str());
        }

        let (result, calls) = runtime.block_on(async {
            let store = RecordingStore::with_accounts(&["alice"]).await;
            let result = workflow(&store)
                .register(&RegisterForm::new(username, password), false, upstream.clone())
                .await
                .unwrap();
            (result, store.calls())
        });

        prop_assert!(!result.account_created);
        prop_assert_eq!(result.outcome, RegistrationOutcome::FormInvalid);
        prop_assert_eq!(result.errors, upstream);
        prop_assert_eq!(calls, CallCounts::default());
    }
}
