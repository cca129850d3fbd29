use thiserror::Error;

/// Domain errors for the item store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemStoreError {
    /// The id column's primary-key constraint rejected a write.
    ///
    /// Reached only when a concurrent writer wins the window between the
    /// handler's uniqueness pre-check and the actual statement.
    #[error("Item with ID {0} already exists")]
    DuplicateId(i32),

    /// The target row disappeared between lookup and write.
    #[error("Item with ID {0} no longer exists")]
    Vanished(i32),
}
