//! Data domain module.
//!
//! Crawled article analyses ingested for later use, with their keywords
//! normalized into a shared keyword table.

mod article;
mod errors;
mod keyword;

pub use article::{normalize_keywords, parse_published_at, Article};
pub use errors::DataError;
pub use keyword::{Keyword, KeywordRef};
