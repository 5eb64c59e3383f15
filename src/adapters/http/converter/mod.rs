//! Converter HTTP adapter.
//!
//! - `POST /converter/convert`
//! - `POST /converter/convert-three-tones`

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ConvertRequest, ConvertThreeTonesRequest, ThreeTonesResponse, ToneMessageResponse};
pub use handlers::ConverterHandlers;
pub use routes::converter_routes;
