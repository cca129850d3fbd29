// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use stockcheck_backend::stores::ItemStore;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an item store over a fresh in-memory database
pub async fn setup_item_store() -> Arc<ItemStore> {
    let db = setup_test_db().await;
    Arc::new(ItemStore::new(db))
}
