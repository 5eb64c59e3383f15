//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresConsultRepository` - Consult sessions with JSONB history
//! - `PostgresKeywordRepository` - Shared keyword table
//! - `PostgresArticleRepository` - Ingested articles

mod article_repository;
mod consult_repository;
mod keyword_repository;

pub use article_repository::PostgresArticleRepository;
pub use consult_repository::PostgresConsultRepository;
pub use keyword_repository::PostgresKeywordRepository;
