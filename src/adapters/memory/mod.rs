//! In-memory adapters.
//!
//! Process-local implementations of the repository ports. Used by tests and
//! by the binary when no database is configured.

mod article_repository;
mod consult_repository;
mod keyword_repository;

pub use article_repository::InMemoryArticleRepository;
pub use consult_repository::InMemoryConsultRepository;
pub use keyword_repository::InMemoryKeywordRepository;
