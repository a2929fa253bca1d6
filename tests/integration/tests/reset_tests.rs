//! Test-reset behavior: wiping every table between suite runs
//!
//! Kept in its own binary so the blanket delete cannot race against
//! other tests touching the same database.

use integration_tests::{check_test_env, create_message, create_unique_user, TestServer};
use warbler_core::traits::{MessageRepository, UserRepository};
use warbler_db::{PgMessageRepository, PgUserRepository};

#[tokio::test]
async fn test_reset_db_clears_all_tables() {
    if !check_test_env() {
        return;
    }
    let server = TestServer::start().await.unwrap();

    let user = create_unique_user(&server.pool).await.unwrap();
    let message = create_message(&server.pool, user.id, "doomed warble")
        .await
        .unwrap();

    server.reset_db().await.unwrap();

    let user_repo = PgUserRepository::new(server.pool.clone());
    let message_repo = PgMessageRepository::new(server.pool.clone());

    assert!(user_repo.find_by_id(user.id).await.unwrap().is_none());
    assert!(message_repo.find_by_id(message.id).await.unwrap().is_none());
}
