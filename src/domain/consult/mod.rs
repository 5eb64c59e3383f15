//! Consult domain module.
//!
//! A consult is a short coaching conversation: the user takes three turns,
//! then asks for an AI-generated analysis of their relationship situation.
//!
//! # State
//!
//! - `Open` - fewer than three user turns
//! - `Completed` - three user turns recorded; analysis is available
//!
//! The state is derived from the message history, never stored.

mod aggregate;
mod analysis;
mod errors;
mod message;

pub use aggregate::{ConsultSession, ConsultStatus, REQUIRED_USER_TURNS};
pub use analysis::Analysis;
pub use errors::ConsultError;
pub use message::{Message, MessageRecord, MessageRole};
