//! Data HTTP adapter.
//!
//! - `POST /data` - ingest crawled article analyses
//! - `GET /data?limit=N` - most recent articles

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ArticleListResponse, ArticleResponse, CreateArticlesRequest};
pub use handlers::DataHandlers;
pub use routes::data_routes;
