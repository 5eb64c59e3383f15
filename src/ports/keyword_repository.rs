//! Keyword repository port.

use crate::domain::data::Keyword;
use crate::domain::foundation::{DomainError, KeywordId};
use async_trait::async_trait;

/// Repository port for the shared keyword table.
#[async_trait]
pub trait KeywordRepository: Send + Sync {
    /// Return the keyword with this name, creating it if needed.
    ///
    /// Names are trimmed before lookup. Blank names are a validation error.
    async fn get_or_create(&self, name: &str) -> Result<Keyword, DomainError>;

    async fn find_by_id(&self, id: KeywordId) -> Result<Option<Keyword>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn KeywordRepository) {}
    }
}
