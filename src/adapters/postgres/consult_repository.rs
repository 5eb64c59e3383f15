//! PostgreSQL implementation of ConsultRepository.
//!
//! One row per session. The conversation lives in a JSONB array of
//! `{role, content}` records; `version` guards concurrent writers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::consult::{ConsultSession, Message, MessageRecord};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp, UserId};
use crate::domain::profile::{Gender, Mbti, UserProfile};
use crate::ports::ConsultRepository;

/// PostgreSQL implementation of ConsultRepository.
#[derive(Clone)]
pub struct PostgresConsultRepository {
    pool: PgPool,
}

impl PostgresConsultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConsultRepository for PostgresConsultRepository {
    async fn save(&self, session: &ConsultSession) -> Result<ConsultSession, DomainError> {
        let saved = session.with_next_version();
        let messages = Json(session.conversation_history());

        let result = if session.version() == 0 {
            sqlx::query(
                r#"
                INSERT INTO consult_sessions (
                    id, user_id, mbti, gender, messages, version, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(session.id().as_uuid())
            .bind(session.user_id().as_str())
            .bind(session.profile().mbti().code())
            .bind(session.profile().gender().as_code())
            .bind(messages)
            .bind(saved.version() as i64)
            .bind(session.created_at().as_datetime())
            .execute(&self.pool)
            .await
        } else {
            sqlx::query(
                r#"
                UPDATE consult_sessions SET
                    messages = $2,
                    version = $3
                WHERE id = $1 AND version = $4
                "#,
            )
            .bind(session.id().as_uuid())
            .bind(messages)
            .bind(saved.version() as i64)
            .bind(session.version() as i64)
            .execute(&self.pool)
            .await
        };

        let result = result
            .map_err(|e| DomainError::database(format!("Failed to save consult session: {}", e)))?;

        if result.rows_affected() == 0 {
            tracing::warn!(session_id = %session.id(), version = session.version(), "stale consult write");
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!(
                    "Consult session {} changed since version {}",
                    session.id(),
                    session.version()
                ),
            )
            .with_detail("session_id", session.id().to_string()));
        }

        Ok(saved)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<ConsultSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, mbti, gender, messages, version, created_at
            FROM consult_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch consult session: {}", e)))?;

        row.map(row_to_session).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

fn corrupt(what: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::database(format!("Invalid stored {}: {}", what, err))
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ConsultSession, DomainError> {
    let Json(records): Json<Vec<MessageRecord>> = column(&row, "messages")?;

    session_from_columns(SessionColumns {
        id: column(&row, "id")?,
        user_id: column(&row, "user_id")?,
        mbti: column(&row, "mbti")?,
        gender: column(&row, "gender")?,
        records,
        version: column(&row, "version")?,
        created_at: column(&row, "created_at")?,
    })
}

/// Decoded `consult_sessions` columns.
struct SessionColumns {
    id: uuid::Uuid,
    user_id: String,
    mbti: String,
    gender: String,
    records: Vec<MessageRecord>,
    version: i64,
    created_at: DateTime<Utc>,
}

fn session_from_columns(cols: SessionColumns) -> Result<ConsultSession, DomainError> {
    let profile = UserProfile::new(
        cols.gender.parse::<Gender>().map_err(|e| corrupt("gender", e))?,
        Mbti::new(&cols.mbti).map_err(|e| corrupt("mbti", e))?,
    );

    let messages = cols
        .records
        .into_iter()
        .map(Message::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| corrupt("message", e))?;

    Ok(ConsultSession::reconstitute(
        SessionId::from_uuid(cols.id),
        UserId::new(cols.user_id).map_err(|e| corrupt("user_id", e))?,
        profile,
        messages,
        Timestamp::from_datetime(cols.created_at),
        u64::try_from(cols.version).map_err(|e| corrupt("version", e))?,
    ))
}
