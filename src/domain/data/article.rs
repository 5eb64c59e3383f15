//! Article entity.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::{ArticleId, ValidationError};

/// An ingested article analysis.
///
/// `id` is `None` until the article has been saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: Option<ArticleId>,
    title: String,
    content: String,
    keywords: Vec<String>,
    published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Creates an unsaved article.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title or content is blank
    ///
    /// Title and content are stored trimmed.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        keywords: Vec<String>,
        published_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        let content = content.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if content.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            id: None,
            title,
            content,
            keywords,
            published_at,
        })
    }

    /// Reconstitute an article from persistence (no validation).
    pub fn reconstitute(
        id: ArticleId,
        title: String,
        content: String,
        keywords: Vec<String>,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            content,
            keywords,
            published_at,
        }
    }

    /// Returns a copy carrying the id the store assigned.
    pub fn with_id(mut self, id: ArticleId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn published_at(&self) -> Option<&DateTime<Utc>> {
        self.published_at.as_ref()
    }

    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        self.keywords.push(keyword.into());
    }
}

/// Trims keywords and drops the blank ones, keeping order.
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Lenient publication date parsing.
///
/// Accepts RFC 3339 (including a trailing `Z`), naive `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC) and bare `YYYY-MM-DD`. Anything else yields `None`.
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
