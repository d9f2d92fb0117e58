use chrono::{Duration, Utc};
use data_access_objects::create_tables;
use models::snippets;
use sea_orm::*;

use crate::UserRepository;

/// A fresh in-memory database with the schema applied. A single pooled
/// connection keeps every query on the same SQLite memory instance.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    create_tables(&db).await.expect("Failed to create tables");
    db
}

pub async fn create_test_user(db: &DatabaseConnection, email: &str, password: &str) -> i32 {
    UserRepository::insert(db, "Test User".to_string(), email.to_string(), password)
        .await
        .expect("Failed to create test user")
}

pub async fn create_expired_snippet(db: &DatabaseConnection, title: &str) -> snippets::Model {
    let created = Utc::now().naive_utc() - Duration::days(8);
    let snippet = snippets::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        content: ActiveValue::Set("expired".to_string()),
        created: ActiveValue::Set(created),
        expires: ActiveValue::Set(created + Duration::days(7)),
        ..Default::default()
    };

    snippet.insert(db).await.expect("Failed to create test snippet")
}
