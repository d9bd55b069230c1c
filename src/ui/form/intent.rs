use crate::generation::SubmitOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace the prompt verbatim.
    SetPrompt(String),
    InsertChar(char),
    /// Backspace at the end of the prompt.
    DeleteChar,
    /// Bracketed paste into the prompt. Line breaks become spaces.
    Paste(String),

    /// Raw slider value; truncated and clamped to 1..=100.
    SetTokenCount(f64),
    /// Move the token slider by whole steps.
    StepTokenCount(i32),
    /// Raw slider value; clamped to 0.0..=1.0 on the 0.1 grid.
    SetTemperature(f64),
    /// Move the temperature slider by 0.1 steps.
    StepTemperature(i32),

    FocusNext,
    FocusPrev,

    /// Submit pressed. Ignored while a request is in flight.
    Submit,
    /// The in-flight request settled.
    Settled(SubmitOutcome),

    /// Spinner tick.
    AnimationTick,
}

impl Intent for FormIntent {}
