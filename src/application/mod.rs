//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AddMessageCommand, AddMessageHandler, AddMessageResult, ConvertMessageCommand,
    ConvertMessageHandler, ConvertThreeTonesCommand, ConvertThreeTonesHandler,
    CreateArticlesCommand, CreateArticlesHandler, GetAnalysisHandler, GetAnalysisQuery,
    GetRecentArticlesHandler, GetRecentArticlesQuery, NewArticle, StartConsultCommand,
    StartConsultHandler, StartConsultResult,
};
