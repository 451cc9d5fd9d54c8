//! Group membership mutation tests.

use kc_admin_client::{AccessToken, AdminClient, AdminError, EntityId};
use kc_integration_tests::{MockKeycloak, TEST_TOKEN};

/// Tests that adding the same user twice succeeds both times.
#[tokio::test]
async fn test_add_user_to_group_is_idempotent() -> anyhow::Result<()> {
    let kc = MockKeycloak::start().await;
    kc.mount_add_to_group("u-1", "g-1", 204, Some(2)).await;

    let ctx = kc.credentials();
    let client = AdminClient::new(&ctx)?;
    let token = AccessToken::new(TEST_TOKEN);
    let user = EntityId::new("u-1");
    let group = EntityId::new("g-1");

    client.add_user_to_group(&token, &user, &group).await?;
    client.add_user_to_group(&token, &user, &group).await?;
    Ok(())
}

/// Tests that a refused mutation reports status and body.
#[tokio::test]
async fn test_add_user_to_group_refused() -> anyhow::Result<()> {
    let kc = MockKeycloak::start().await;
    kc.mount_add_to_group("u-1", "g-1", 403, Some(1)).await;

    let ctx = kc.credentials();
    let client = AdminClient::new(&ctx)?;
    let err = client
        .add_user_to_group(
            &AccessToken::new(TEST_TOKEN),
            &EntityId::new("u-1"),
            &EntityId::new("g-1"),
        )
        .await
        .unwrap_err();

    match &err {
        AdminError::Mutation {
            user_id,
            group_id,
            status,
            body,
        } => {
            assert_eq!(user_id, "u-1");
            assert_eq!(group_id, "g-1");
            assert_eq!(*status, 403);
            assert!(body.contains("unknown_error"));
        }
        other => panic!("expected mutation error, got {other:?}"),
    }
    assert!(!err.is_fatal_for_member());
    Ok(())
}

/// Tests that success means exactly 204, not any 2xx.
#[tokio::test]
async fn test_add_user_to_group_other_success_status() -> anyhow::Result<()> {
    let kc = MockKeycloak::start().await;
    kc.mount_add_to_group("u-1", "g-1", 200, None).await;

    let ctx = kc.credentials();
    let client = AdminClient::new(&ctx)?;
    let err = client
        .add_user_to_group(
            &AccessToken::new(TEST_TOKEN),
            &EntityId::new("u-1"),
            &EntityId::new("g-1"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AdminError::Mutation { status: 200, .. }));
    Ok(())
}
