//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `ConsultRepository` - Consult session storage with version checks
//! - `ArticleRepository` - Ingested articles
//! - `KeywordRepository` - Shared keyword table
//!
//! ## AI
//!
//! - `AICounselor` - Four-part relationship analysis
//! - `MessageConverter` - Tone rewriting
//!
//! ## Auth
//!
//! - `SessionValidator` - Bearer token validation

mod ai_counselor;
mod article_repository;
mod consult_repository;
mod keyword_repository;
mod message_converter;
mod session_validator;

pub use ai_counselor::{AICounselor, AIError};
pub use article_repository::ArticleRepository;
pub use consult_repository::ConsultRepository;
pub use keyword_repository::KeywordRepository;
pub use message_converter::MessageConverter;
pub use session_validator::SessionValidator;
