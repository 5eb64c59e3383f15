//! PostgreSQL implementation of KeywordRepository.

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool, Row};

use crate::domain::data::Keyword;
use crate::domain::foundation::{DomainError, KeywordId, ValidationError};
use crate::ports::KeywordRepository;

#[derive(Clone)]
pub struct PostgresKeywordRepository {
    pool: PgPool,
}

impl PostgresKeywordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeywordRepository for PostgresKeywordRepository {
    async fn get_or_create(&self, name: &str) -> Result<Keyword, DomainError> {
        upsert_keyword(&self.pool, name).await
    }

    async fn find_by_id(&self, id: KeywordId) -> Result<Option<Keyword>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM keywords WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch keyword: {}", e)))?;

        row.map(row_to_keyword).transpose()
    }
}

/// Returns the keyword named `name`, inserting it first if needed.
///
/// Takes any executor so article inserts can run it inside their transaction.
pub(super) async fn upsert_keyword<'e, E>(executor: E, name: &str) -> Result<Keyword, DomainError>
where
    E: PgExecutor<'e>,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field("keyword").into());
    }

    // The no-op update makes RETURNING yield the existing row on conflict.
    let row = sqlx::query(
        r#"
        INSERT INTO keywords (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_one(executor)
    .await
    .map_err(|e| DomainError::database(format!("Failed to upsert keyword: {}", e)))?;

    row_to_keyword(row)
}

fn row_to_keyword(row: sqlx::postgres::PgRow) -> Result<Keyword, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?;

    Ok(Keyword::new(KeywordId::new(id), name)?)
}
