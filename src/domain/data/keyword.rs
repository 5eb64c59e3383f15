//! Keyword entity and the stored keyword reference format.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KeywordId, ValidationError};

/// A normalized keyword shared by many articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    id: KeywordId,
    name: String,
}

impl Keyword {
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    pub fn new(id: KeywordId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("keyword"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> KeywordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One entry of an article's stored keyword list.
///
/// Current rows store keyword ids; older rows stored the names directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordRef {
    Id(i64),
    Name(String),
}

impl KeywordRef {
    /// Decodes a stored keyword list.
    ///
    /// Missing or malformed JSON yields an empty list, and entries of any
    /// other JSON type are dropped.
    pub fn decode_list(raw: Option<&str>) -> Vec<KeywordRef> {
        let Some(raw) = raw else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            Ok(values) => values
                .into_iter()
                .filter_map(|v| serde_json::from_value(v).ok())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Encodes keyword ids as a JSON list.
    pub fn encode_ids(ids: &[KeywordId]) -> String {
        let values: Vec<i64> = ids.iter().map(KeywordId::value).collect();
        serde_json::Value::from(values).to_string()
    }
}
