//! In-memory keyword table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::data::Keyword;
use crate::domain::foundation::{DomainError, KeywordId};
use crate::ports::KeywordRepository;

#[derive(Debug, Default)]
struct KeywordTable {
    by_id: HashMap<KeywordId, Keyword>,
    by_name: HashMap<String, KeywordId>,
    next_id: i64,
}

/// Keywords keyed by trimmed name, ids assigned from 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeywordRepository {
    table: Arc<RwLock<KeywordTable>>,
}

impl InMemoryKeywordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeywordRepository for InMemoryKeywordRepository {
    async fn get_or_create(&self, name: &str) -> Result<Keyword, DomainError> {
        let name = name.trim();
        let mut table = self.table.write().await;

        if let Some(id) = table.by_name.get(name) {
            if let Some(existing) = table.by_id.get(id) {
                return Ok(existing.clone());
            }
        }

        table.next_id += 1;
        let id = KeywordId::new(table.next_id);
        let keyword = Keyword::new(id, name)?;
        table.by_name.insert(keyword.name().to_string(), id);
        table.by_id.insert(id, keyword.clone());
        Ok(keyword)
    }

    async fn find_by_id(&self, id: KeywordId) -> Result<Option<Keyword>, DomainError> {
        Ok(self.table.read().await.by_id.get(&id).cloned())
    }
}
