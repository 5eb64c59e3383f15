//! Data ingestion and listing handlers.

mod create_articles;
mod get_recent_articles;

pub use create_articles::{CreateArticlesCommand, CreateArticlesHandler, NewArticle};
pub use get_recent_articles::{
    GetRecentArticlesHandler, GetRecentArticlesQuery, DEFAULT_ARTICLE_LIMIT, MAX_ARTICLE_LIMIT,
};
