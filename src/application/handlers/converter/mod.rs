//! Converter command handlers.

mod convert_message;
mod convert_three_tones;

pub use convert_message::{ConvertMessageCommand, ConvertMessageHandler};
pub use convert_three_tones::{ConvertThreeTonesCommand, ConvertThreeTonesHandler};

use crate::domain::converter::ConverterError;
use crate::domain::foundation::ValidationError;

/// Rejects a blank original message before any converter call is made.
fn require_original(original: &str) -> Result<(), ConverterError> {
    if original.trim().is_empty() {
        return Err(ValidationError::empty_field("original_message").into());
    }
    Ok(())
}
