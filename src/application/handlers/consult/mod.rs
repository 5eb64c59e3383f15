//! Consult command and query handlers.

mod add_message;
mod get_analysis;
mod start_consult;

pub use add_message::{AddMessageCommand, AddMessageHandler, AddMessageResult};
pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery, DEFAULT_ANALYSIS_TIMEOUT};
pub use start_consult::{StartConsultCommand, StartConsultHandler, StartConsultResult};
