use crate::config::FormDefaults;
use crate::generation::{normalize_temperature, normalize_token_count, GenerationRequest};
use crate::ui::mvi::UiState;

/// Control that currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Prompt,
    TokenCount,
    Temperature,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Prompt,
        FormField::TokenCount,
        FormField::Temperature,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// Everything the form renders and submits.
///
/// `token_count` and `temperature` only ever hold normalized values.
/// `is_submitting` is true from the accepted submit until the outcome is
/// reduced.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub prompt: String,
    pub token_count: u32,
    pub temperature: f64,
    pub is_submitting: bool,
    pub result_text: String,
    /// Whether `result_text` describes a failure.
    pub result_is_error: bool,
    pub focus: FormField,
    /// Spinner frame while submitting.
    pub animation_tick: u8,
}

impl UiState for FormState {}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}

impl FormState {
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            prompt: String::new(),
            token_count: normalize_token_count(defaults.token_count as f64),
            temperature: normalize_temperature(defaults.temperature),
            is_submitting: false,
            result_text: String::new(),
            result_is_error: false,
            focus: FormField::default(),
            animation_tick: 0,
        }
    }

    /// Submit trigger is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Generating..."
        } else {
            "Generate"
        }
    }

    /// Snapshot the form into a fresh request.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.prompt.clone(), self.token_count, self.temperature)
    }
}
