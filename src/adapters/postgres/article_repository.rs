//! PostgreSQL implementation of ArticleRepository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use super::keyword_repository::upsert_keyword;
use crate::adapters::keywords::decode_keywords;
use crate::domain::data::{Article, KeywordRef};
use crate::domain::foundation::{ArticleId, DomainError};
use crate::ports::{ArticleRepository, KeywordRepository};

/// Articles table.
///
/// `save` upserts keywords and inserts the article in one transaction.
/// Reads resolve keyword ids through the [`KeywordRepository`].
#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    keywords: Arc<dyn KeywordRepository>,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, keywords: Arc<dyn KeywordRepository>) -> Self {
        Self { pool, keywords }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn save(&self, article: &Article) -> Result<Article, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let mut ids = Vec::with_capacity(article.keywords().len());
        for name in article.keywords() {
            if name.trim().is_empty() {
                continue;
            }
            ids.push(upsert_keyword(&mut *tx, name).await?.id());
        }

        let row = sqlx::query(
            r#"
            INSERT INTO articles (title, content, keywords, published_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(article.title())
        .bind(article.content())
        .bind(KeywordRef::encode_ids(&ids))
        .bind(article.published_at().copied())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert article: {}", e)))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit article: {}", e)))?;

        tracing::debug!(article_id = id, keywords = ids.len(), "article inserted");
        Ok(article.clone().with_id(ArticleId::new(id)))
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<Article>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, keywords, published_at
            FROM articles
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch articles: {}", e)))?;

        let mut articles = Vec::with_capacity(rows.len());
        for row in rows {
            articles.push(self.row_to_article(row).await?);
        }
        Ok(articles)
    }
}

impl PostgresArticleRepository {
    async fn row_to_article(&self, row: sqlx::postgres::PgRow) -> Result<Article, DomainError> {
        let get_err = |name: &str, e: sqlx::Error| {
            DomainError::database(format!("Failed to get {}: {}", name, e))
        };

        let id: i64 = row.try_get("id").map_err(|e| get_err("id", e))?;
        let title: String = row.try_get("title").map_err(|e| get_err("title", e))?;
        let content: String = row.try_get("content").map_err(|e| get_err("content", e))?;
        let raw_keywords: Option<String> =
            row.try_get("keywords").map_err(|e| get_err("keywords", e))?;
        let published_at: Option<DateTime<Utc>> = row
            .try_get("published_at")
            .map_err(|e| get_err("published_at", e))?;

        let keywords = decode_keywords(raw_keywords.as_deref(), self.keywords.as_ref()).await?;

        Ok(Article::reconstitute(
            ArticleId::new(id),
            title,
            content,
            keywords,
            published_at,
        ))
    }
}
