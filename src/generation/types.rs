use serde::Serialize;
use serde_json::Value;

/// Smallest token count the service accepts.
pub const TOKEN_COUNT_MIN: u32 = 1;
/// Largest token count the service accepts.
pub const TOKEN_COUNT_MAX: u32 = 100;
pub const TEMPERATURE_MIN: f64 = 0.0;
pub const TEMPERATURE_MAX: f64 = 1.0;
/// Slider granularity for temperature.
pub const TEMPERATURE_STEP: f64 = 0.1;
const TEMPERATURE_STEPS_PER_UNIT: f64 = 10.0;

/// Shown when the service answers with neither an `Ok` nor an `Err` payload.
pub const UNEXPECTED_FORMAT_MESSAGE: &str = "Unexpected response format";

/// Truncate a raw control value toward zero and clamp it to the token range.
///
/// NaN maps to the minimum.
pub fn normalize_token_count(raw: f64) -> u32 {
    if raw.is_nan() {
        return TOKEN_COUNT_MIN;
    }
    let truncated = raw.trunc().clamp(TOKEN_COUNT_MIN as f64, TOKEN_COUNT_MAX as f64);
    truncated as u32
}

/// Clamp a raw control value to the temperature range and snap it to the
/// slider grid.
///
/// NaN maps to the minimum.
pub fn normalize_temperature(raw: f64) -> f64 {
    if raw.is_nan() {
        return TEMPERATURE_MIN;
    }
    let clamped = raw.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
    // Grid points land exactly on their decimal literal.
    (clamped * TEMPERATURE_STEPS_PER_UNIT).round() / TEMPERATURE_STEPS_PER_UNIT
}

/// Parameters of one submission. Built fresh for every call and moved into
/// the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub num_tokens: u32,
    pub temperature: f64,
}

impl GenerationRequest {
    /// Build a request, normalizing the numeric parameters.
    pub fn new(prompt: impl Into<String>, num_tokens: u32, temperature: f64) -> Self {
        Self {
            prompt: prompt.into(),
            num_tokens: num_tokens.clamp(TOKEN_COUNT_MIN, TOKEN_COUNT_MAX),
            temperature: normalize_temperature(temperature),
        }
    }
}

/// Decoded response of the generation service.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// `{"Ok": text}`
    Success { text: String },
    /// `{"Err": message}`
    Failure { message: String },
    /// Anything else, including a known tag with a non-string payload.
    Unrecognized,
}

impl GenerationResult {
    /// Decode an externally tagged `{"Ok": ..}` / `{"Err": ..}` payload.
    ///
    /// `Ok` wins when both tags are present.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Unrecognized;
        };

        if let Some(ok) = object.get("Ok") {
            return match ok.as_str() {
                Some(text) => Self::Success {
                    text: text.to_string(),
                },
                None => Self::Unrecognized,
            };
        }

        if let Some(err) = object.get("Err") {
            return match err.as_str() {
                Some(message) => Self::Failure {
                    message: message.to_string(),
                },
                None => Self::Unrecognized,
            };
        }

        Self::Unrecognized
    }
}

/// How a submission settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service answered and the answer was decoded.
    Completed(GenerationResult),
    /// The call itself failed; carries the failure description.
    Failed(String),
}

impl SubmitOutcome {
    /// Outcome used when a submission ends without the service settling,
    /// e.g. the task panicked or its future was dropped.
    pub fn interrupted() -> Self {
        Self::Failed("generation was interrupted before the service responded".to_string())
    }

    /// Text for the result region.
    pub fn display_text(&self) -> String {
        match self {
            Self::Completed(GenerationResult::Success { text }) => text.clone(),
            Self::Completed(GenerationResult::Failure { message }) => format!("Error: {}", message),
            Self::Completed(GenerationResult::Unrecognized) => UNEXPECTED_FORMAT_MESSAGE.to_string(),
            Self::Failed(description) => format!("Error: {}", description),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Completed(GenerationResult::Success { .. }))
    }
}
