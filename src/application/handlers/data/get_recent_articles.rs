//! GetRecentArticlesHandler - newest articles first.

use std::sync::Arc;

use crate::domain::data::{Article, DataError};
use crate::ports::ArticleRepository;

pub const DEFAULT_ARTICLE_LIMIT: u32 = 20;
pub const MAX_ARTICLE_LIMIT: u32 = 100;

/// Query for recent articles. `limit` is clamped to `1..=MAX_ARTICLE_LIMIT`.
#[derive(Debug, Clone, Default)]
pub struct GetRecentArticlesQuery {
    pub limit: Option<u32>,
}

impl GetRecentArticlesQuery {
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_ARTICLE_LIMIT)
            .clamp(1, MAX_ARTICLE_LIMIT)
    }
}

pub struct GetRecentArticlesHandler {
    repository: Arc<dyn ArticleRepository>,
}

impl GetRecentArticlesHandler {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetRecentArticlesQuery) -> Result<Vec<Article>, DataError> {
        let limit = query.effective_limit();
        let articles = self.repository.get_recent(limit).await?;
        tracing::debug!(limit, returned = articles.len(), "recent articles");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryArticleRepository, InMemoryKeywordRepository};

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(GetRecentArticlesQuery { limit: None }.effective_limit(), 20);
        assert_eq!(GetRecentArticlesQuery { limit: Some(0) }.effective_limit(), 1);
        assert_eq!(GetRecentArticlesQuery { limit: Some(5) }.effective_limit(), 5);
        assert_eq!(GetRecentArticlesQuery { limit: Some(500) }.effective_limit(), 100);
    }

    #[tokio::test]
    async fn returns_newest_first_up_to_limit() {
        let repo = Arc::new(InMemoryArticleRepository::new(Arc::new(
            InMemoryKeywordRepository::new(),
        )));
        for i in 0..5 {
            let article = Article::new(format!("제목 {}", i), "내용", vec![], None).unwrap();
            repo.save(&article).await.unwrap();
        }
        let handler = GetRecentArticlesHandler::new(repo);

        let articles = handler
            .handle(GetRecentArticlesQuery { limit: Some(3) })
            .await
            .unwrap();

        let titles: Vec<&str> = articles.iter().map(Article::title).collect();
        assert_eq!(titles, vec!["제목 4", "제목 3", "제목 2"]);
    }
}
