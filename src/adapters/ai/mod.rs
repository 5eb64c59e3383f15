//! AI adapters.
//!
//! - `OpenAICounselor` / `OpenAIMessageConverter` - OpenAI chat completions in JSON mode
//! - `MockAICounselor` / `MockMessageConverter` - deterministic stand-ins

mod mock_converter;
mod mock_counselor;
mod openai_client;
mod openai_converter;
mod openai_counselor;

pub use mock_converter::MockMessageConverter;
pub use mock_counselor::MockAICounselor;
pub use openai_client::{OpenAIClient, OpenAIConfig};
pub use openai_converter::OpenAIMessageConverter;
pub use openai_counselor::OpenAICounselor;
