mod common;

use std::sync::Arc;

use account_service::domain::user::models::RegistrationCommand;
use account_service::domain::user::models::Role;
use account_service::domain::user::models::UpdateUserCommand;
use account_service::domain::user::models::Username;
use account_service::domain::user::ports::UserServicePort;
use account_service::domain::user::service::UserService;
use account_service::outbound::repositories::PostgresUserRepository;
use account_service::user::errors::UserError;
use common::TestDb;

fn registration(username: &str) -> RegistrationCommand {
    RegistrationCommand {
        username: Username::new(username.to_string()).unwrap(),
        email: None,
        password: "secretpw1".to_string(),
        role: Role::default(),
        is_active: true,
        first_name: "A".to_string(),
        last_name: "L".to_string(),
    }
}

#[tokio::test]
async fn test_soft_deleted_user_excluded_from_reads() {
    let db = TestDb::new().await;
    let service = UserService::new(Arc::new(PostgresUserRepository::new(db.pool.clone())));

    let user = service
        .register_user(registration("alice"))
        .await
        .expect("registration failed");

    service
        .delete_user(&user.id)
        .await
        .expect("soft delete failed");

    // Reads exclude soft-deleted records
    let by_id = service.get_user(&user.id).await;
    assert!(matches!(by_id.unwrap_err(), UserError::NotFound(_)));

    let by_username = service.get_user_by_username(&user.username).await;
    assert!(matches!(
        by_username.unwrap_err(),
        UserError::NotFoundByUsername(_)
    ));

    // The row itself stays in storage with its deletion timestamp set
    let (deleted_at,): (Option<chrono::DateTime<chrono::Utc>>,) =
        sqlx::query_as("SELECT deleted_at FROM users WHERE id = $1")
            .bind(user.id.0)
            .fetch_one(&db.pool)
            .await
            .expect("row should still exist");
    assert!(deleted_at.is_some());

    // Deleting again reports not found
    let again = service.delete_user(&user.id).await;
    assert!(matches!(again.unwrap_err(), UserError::NotFound(_)));
}

#[tokio::test]
async fn test_update_user_persists_changes() {
    let db = TestDb::new().await;
    let service = UserService::new(Arc::new(PostgresUserRepository::new(db.pool.clone())));

    let user = service
        .register_user(registration("alice"))
        .await
        .expect("registration failed");
    let original_hash = user.password_hash.clone();

    let command = UpdateUserCommand {
        username: Some(Username::new("alice2".to_string()).unwrap()),
        password: Some("newsecret99".to_string()),
        ..Default::default()
    };

    let updated = service
        .update_user(&user.id, command)
        .await
        .expect("update failed");
    assert_eq!(updated.username.as_str(), "alice2");
    assert_ne!(updated.password_hash, original_hash);

    let fetched = service.get_user(&user.id).await.expect("lookup failed");
    assert_eq!(fetched.username.as_str(), "alice2");
    assert_eq!(fetched.password_hash, updated.password_hash);
}

#[tokio::test]
async fn test_update_to_taken_username_conflicts() {
    let db = TestDb::new().await;
    let service = UserService::new(Arc::new(PostgresUserRepository::new(db.pool.clone())));

    service
        .register_user(registration("alice"))
        .await
        .expect("registration failed");
    let bob = service
        .register_user(registration("bob"))
        .await
        .expect("registration failed");

    let command = UpdateUserCommand {
        username: Some(Username::new("alice".to_string()).unwrap()),
        ..Default::default()
    };

    let result = service.update_user(&bob.id, command).await;
    assert!(matches!(
        result.unwrap_err(),
        UserError::UsernameAlreadyExists(_)
    ));
}
