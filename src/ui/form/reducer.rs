use crate::generation::{normalize_temperature, normalize_token_count, TEMPERATURE_STEP};
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetPrompt(text) => {
                state.prompt = text;
            }
            FormIntent::InsertChar(ch) => {
                state.prompt.push(ch);
            }
            FormIntent::DeleteChar => {
                state.prompt.pop();
            }
            FormIntent::Paste(text) => {
                let single_line = text.lines().collect::<Vec<_>>().join(" ");
                state.prompt.push_str(&single_line);
            }

            FormIntent::SetTokenCount(raw) => {
                state.token_count = normalize_token_count(raw);
            }
            FormIntent::StepTokenCount(delta) => {
                let raw = state.token_count as f64 + delta as f64;
                state.token_count = normalize_token_count(raw);
            }
            FormIntent::SetTemperature(raw) => {
                state.temperature = normalize_temperature(raw);
            }
            FormIntent::StepTemperature(delta) => {
                let raw = state.temperature + delta as f64 * TEMPERATURE_STEP;
                state.temperature = normalize_temperature(raw);
            }

            FormIntent::FocusNext => {
                state.focus = state.focus.next();
            }
            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
            }

            FormIntent::Submit => {
                if state.can_submit() {
                    state.is_submitting = true;
                    state.animation_tick = 0;
                }
            }
            FormIntent::Settled(outcome) => {
                state.result_text = outcome.display_text();
                state.result_is_error = outcome.is_error();
                // Last step on every outcome.
                state.is_submitting = false;
            }

            FormIntent::AnimationTick => {
                if state.is_submitting {
                    state.animation_tick = state.animation_tick.wrapping_add(1);
                }
            }
        }
        state
    }
}
