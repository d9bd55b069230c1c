//! Boundary to the external text-generation service.
//!
//! The service is reached through the [`GenerationService`] trait. Responses
//! are decoded exactly once, here, into [`GenerationResult`]; nothing past
//! this module inspects raw payloads.

mod error;
mod http;
mod service;
mod types;

pub use error::ServiceError;
pub use http::HttpGenerationService;
pub use service::GenerationService;
pub use types::{
    normalize_temperature, normalize_token_count, GenerationRequest, GenerationResult,
    SubmitOutcome, TEMPERATURE_MAX, TEMPERATURE_MIN, TEMPERATURE_STEP, TOKEN_COUNT_MAX,
    TOKEN_COUNT_MIN, UNEXPECTED_FORMAT_MESSAGE,
};
