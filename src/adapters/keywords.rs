//! Keyword list encoding shared by the article repositories.
//!
//! Article rows keep their keywords as a JSON list in a text column. New rows
//! hold keyword ids; rows written before normalization hold the names.

use crate::domain::data::KeywordRef;
use crate::domain::foundation::{DomainError, KeywordId};
use crate::ports::KeywordRepository;

/// Resolves names to keyword ids (creating keywords as needed) and encodes
/// them for storage.
pub(crate) async fn encode_keywords(
    names: &[String],
    keywords: &dyn KeywordRepository,
) -> Result<String, DomainError> {
    let mut ids: Vec<KeywordId> = Vec::with_capacity(names.len());
    for name in names {
        if name.trim().is_empty() {
            continue;
        }
        ids.push(keywords.get_or_create(name).await?.id());
    }
    Ok(KeywordRef::encode_ids(&ids))
}

/// Decodes a stored keyword list back into names.
///
/// Ids with no matching keyword are skipped; legacy names are trimmed and
/// blank ones dropped.
pub(crate) async fn decode_keywords(
    raw: Option<&str>,
    keywords: &dyn KeywordRepository,
) -> Result<Vec<String>, DomainError> {
    let mut names = Vec::new();
    for entry in KeywordRef::decode_list(raw) {
        match entry {
            KeywordRef::Id(id) => match keywords.find_by_id(KeywordId::new(id)).await? {
                Some(keyword) => names.push(keyword.name().to_string()),
                None => tracing::debug!(keyword_id = id, "skipping dangling keyword id"),
            },
            KeywordRef::Name(name) => {
                let name = name.trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
    }
    Ok(names)
}
