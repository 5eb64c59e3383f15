//! In-memory article store.
//!
//! Rows keep keywords in the same JSON-list form the database uses, so the
//! id/name resolution path is the same one production runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::keywords::{decode_keywords, encode_keywords};
use crate::domain::data::Article;
use crate::domain::foundation::{ArticleId, DomainError};
use crate::ports::{ArticleRepository, KeywordRepository};

#[derive(Debug, Clone)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    keywords: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

pub struct InMemoryArticleRepository {
    rows: RwLock<Vec<ArticleRow>>,
    keywords: Arc<dyn KeywordRepository>,
}

impl InMemoryArticleRepository {
    pub fn new(keywords: Arc<dyn KeywordRepository>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            keywords,
        }
    }

    #[cfg(test)]
    async fn insert_raw(&self, title: &str, keywords: Option<&str>) {
        let mut rows = self.rows.write().await;
        let id = rows.len() as i64 + 1;
        rows.push(ArticleRow {
            id,
            title: title.to_string(),
            content: "본문".to_string(),
            keywords: keywords.map(str::to_string),
            published_at: None,
        });
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: &Article) -> Result<Article, DomainError> {
        let encoded = encode_keywords(article.keywords(), self.keywords.as_ref()).await?;

        let mut rows = self.rows.write().await;
        let id = rows.len() as i64 + 1;
        rows.push(ArticleRow {
            id,
            title: article.title().to_string(),
            content: article.content().to_string(),
            keywords: Some(encoded),
            published_at: article.published_at().copied(),
        });

        Ok(article.clone().with_id(ArticleId::new(id)))
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<Article>, DomainError> {
        let recent: Vec<ArticleRow> = {
            let rows = self.rows.read().await;
            rows.iter().rev().take(limit as usize).cloned().collect()
        };

        let mut articles = Vec::with_capacity(recent.len());
        for row in recent {
            let keywords = decode_keywords(row.keywords.as_deref(), self.keywords.as_ref()).await?;
            articles.push(Article::reconstitute(
                ArticleId::new(row.id),
                row.title,
                row.content,
                keywords,
                row.published_at,
            ));
        }
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryKeywordRepository;

    fn repo() -> InMemoryArticleRepository {
        InMemoryArticleRepository::new(Arc::new(InMemoryKeywordRepository::new()))
    }

    #[tokio::test]
    async fn saved_keywords_come_back_as_names() {
        let repo = repo();
        let article = Article::new(
            "제목",
            "내용",
            vec!["AI".to_string(), "반도체".to_string()],
            None,
        )
        .unwrap();

        let saved = repo.save(&article).await.unwrap();
        let recent = repo.get_recent(10).await.unwrap();

        assert_eq!(saved.id(), Some(ArticleId::new(1)));
        assert_eq!(recent, vec![saved]);
    }

    #[tokio::test]
    async fn legacy_and_malformed_rows_are_tolerated() {
        let repo = repo();
        repo.insert_raw("legacy", Some(r#"["  옛 키워드 "]"#)).await;
        repo.insert_raw("broken", Some("not-json")).await;
        repo.insert_raw("empty", None).await;

        let recent = repo.get_recent(10).await.unwrap();

        let keywords: Vec<Vec<String>> = recent.iter().map(|a| a.keywords().to_vec()).collect();
        assert_eq!(
            keywords,
            vec![vec![], vec![], vec!["옛 키워드".to_string()]]
        );
    }
}
