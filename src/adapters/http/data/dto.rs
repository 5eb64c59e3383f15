//! Request and response bodies for data endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::NewArticle;
use crate::domain::data::Article;

/// Crawler payload for `POST /data`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticlesRequest {
    #[serde(default)]
    pub articles: Vec<CrawledArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrawledArticle {
    #[serde(default)]
    pub analysis: Option<ArticleAnalysis>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleAnalysis {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl CreateArticlesRequest {
    /// Items without an `analysis` object carry nothing to store.
    pub fn into_new_articles(self) -> Vec<NewArticle> {
        self.articles
            .into_iter()
            .filter_map(|item| item.analysis)
            .map(|a| NewArticle {
                title: a.title,
                content: a.content,
                keywords: a.keywords,
                published_at: a.published_at,
            })
            .collect()
    }
}

/// Query string of `GET /data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentArticlesParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().map(|id| id.value()),
            title: article.title().to_string(),
            content: article.content().to_string(),
            keywords: article.keywords().to_vec(),
            published_at: article.published_at().copied(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub count: usize,
}

impl ArticleListResponse {
    pub fn new(articles: Vec<Article>) -> Self {
        let articles: Vec<ArticleResponse> =
            articles.into_iter().map(ArticleResponse::from).collect();
        Self {
            count: articles.len(),
            articles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawler_payload_skips_items_without_analysis() {
        let req: CreateArticlesRequest = serde_json::from_value(serde_json::json!({
            "articles": [
                {"analysis": {"title": "t", "content": "c", "keywords": ["k"]}},
                {"url": "https://example.com"},
                {"analysis": {"title": "t2", "content": "c2", "published_at": "2024-01-01"}}
            ]
        }))
        .unwrap();

        let items = req.into_new_articles();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].keywords, vec!["k"]);
        assert_eq!(items[1].published_at.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn missing_articles_field_is_empty() {
        let req: CreateArticlesRequest = serde_json::from_str("{}").unwrap();
        assert!(req.into_new_articles().is_empty());
    }
}
