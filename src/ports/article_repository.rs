//! Article repository port.

use crate::domain::data::Article;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for ingested articles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Store a new article and return it with its assigned id.
    ///
    /// Keyword names are resolved through the keyword table; the article
    /// row keeps only the ids.
    async fn save(&self, article: &Article) -> Result<Article, DomainError>;

    /// Most recent articles first, at most `limit` of them.
    ///
    /// Keywords come back as names. References to keywords that no longer
    /// exist are skipped.
    async fn get_recent(&self, limit: u32) -> Result<Vec<Article>, DomainError>;
}
