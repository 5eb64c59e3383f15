//! CreateArticlesHandler - stores a batch of crawled article analyses.

use std::sync::Arc;

use crate::domain::data::{normalize_keywords, parse_published_at, Article, DataError};
use crate::ports::ArticleRepository;

/// One article as it arrives from the crawler.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub published_at: Option<String>,
}

/// Command to store a batch of articles.
#[derive(Debug, Clone)]
pub struct CreateArticlesCommand {
    pub articles: Vec<NewArticle>,
}

/// Handler for article ingestion.
pub struct CreateArticlesHandler {
    repository: Arc<dyn ArticleRepository>,
}

impl CreateArticlesHandler {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Saves every usable item and returns them with their ids.
    ///
    /// Items with a blank title or content are skipped. A batch with nothing
    /// usable fails with `NothingToSave`.
    #[tracing::instrument(skip(self, cmd), fields(received = cmd.articles.len()))]
    pub async fn handle(&self, cmd: CreateArticlesCommand) -> Result<Vec<Article>, DataError> {
        let mut saved = Vec::with_capacity(cmd.articles.len());

        for item in cmd.articles {
            let published_at = item.published_at.as_deref().and_then(parse_published_at);
            let keywords = normalize_keywords(&item.keywords);

            let article = match Article::new(item.title, item.content, keywords, published_at) {
                Ok(article) => article,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unusable article");
                    continue;
                }
            };

            saved.push(self.repository.save(&article).await?);
        }

        if saved.is_empty() {
            return Err(DataError::NothingToSave);
        }

        tracing::info!(saved = saved.len(), "articles stored");
        Ok(saved)
    }
}
