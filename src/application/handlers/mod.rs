//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod consult;
pub mod converter;
pub mod data;

pub use consult::{
    AddMessageCommand, AddMessageHandler, AddMessageResult, GetAnalysisHandler, GetAnalysisQuery,
    StartConsultCommand, StartConsultHandler, StartConsultResult,
};
pub use converter::{
    ConvertMessageCommand, ConvertMessageHandler, ConvertThreeTonesCommand,
    ConvertThreeTonesHandler,
};
pub use data::{
    CreateArticlesCommand, CreateArticlesHandler, GetRecentArticlesHandler,
    GetRecentArticlesQuery, NewArticle,
};
