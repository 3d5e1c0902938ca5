use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::diagnostics::DiagnosticsError;
use crate::domain::diagnostics::TestEntry;
use crate::domain::diagnostics::TestEntryRepository;

pub struct PostgresTestEntryRepository {
    pool: PgPool,
}

impl PostgresTestEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestEntryRepository for PostgresTestEntryRepository {
    async fn insert(&self, entry: TestEntry) -> Result<(), DiagnosticsError> {
        sqlx::query(
            r#"
            INSERT INTO test (id, username, jwt_token_version)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&entry.username)
        .bind(entry.jwt_token_version)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return DiagnosticsError::DuplicateUsername(entry.username.clone());
                }
            }
            DiagnosticsError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
