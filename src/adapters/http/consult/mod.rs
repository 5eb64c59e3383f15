//! Consult HTTP adapter.
//!
//! - `POST /consult/start` - start a session (auth)
//! - `POST /consult/:id/messages` - append a message (auth, owner only)
//! - `GET /consult/:id/analysis` - analysis of a completed session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    AddMessageRequest, AddMessageResponse, AnalysisResponse, StartConsultRequest,
    StartConsultResponse,
};
pub use handlers::ConsultHandlers;
pub use routes::consult_routes;
