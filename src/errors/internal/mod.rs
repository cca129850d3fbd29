use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemStoreError;

/// Internal error type for store and service operations
///
/// Not exposed via API - endpoints must convert to an API error type.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemStoreError),

    #[error("File error: {operation} failed: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn io(operation: &str, source: std::io::Error) -> InternalError {
        InternalError::Io {
            operation: operation.to_string(),
            source,
        }
    }
}
