//! Converter domain module.
//!
//! Rewrites a message for a receiver with a given MBTI, in one of a fixed set
//! of tones.

mod errors;
mod tone;

pub use errors::ConverterError;
pub use tone::{Tone, ToneMessage};
