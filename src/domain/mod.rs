//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `profile` - MBTI, gender and the user profile they form
//! - `consult` - Consult session lifecycle, messages and analysis
//! - `converter` - Tone conversion value objects
//! - `data` - Ingested articles and keywords

pub mod consult;
pub mod converter;
pub mod data;
pub mod foundation;
pub mod profile;
