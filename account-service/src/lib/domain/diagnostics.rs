use async_trait::async_trait;
use thiserror::Error;

/// Row inserted into the scratch `test` table by the diagnostic endpoint.
///
/// Exists only for schema-migration experimentation; not part of the
/// credential lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    pub username: String,
    pub jwt_token_version: i32,
}

/// Error for diagnostic scratch-table operations.
#[derive(Debug, Clone, Error)]
pub enum DiagnosticsError {
    #[error("Test entry already exists for username: {0}")]
    DuplicateUsername(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence port for the scratch `test` table.
#[async_trait]
pub trait TestEntryRepository: Send + Sync + 'static {
    /// Insert a scratch row.
    ///
    /// # Errors
    /// * `DuplicateUsername` - unique constraint violated
    /// * `DatabaseError` - insert failed
    async fn insert(&self, entry: TestEntry) -> Result<(), DiagnosticsError>;
}
