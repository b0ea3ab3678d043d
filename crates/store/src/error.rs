use thiserror::Error;

/// Errors that can occur when talking to the scheduling store.
///
/// Every variant is a transient access failure from the resolver's point of
/// view: safe to retry, never a statement about record existence (absent
/// records are `Ok(None)` / absent map entries, not errors).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
