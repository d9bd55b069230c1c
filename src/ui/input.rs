use crate::generation::{
    GenerationService, TEMPERATURE_MAX, TEMPERATURE_MIN, TOKEN_COUNT_MAX, TOKEN_COUNT_MIN,
};
use crate::ui::app::App;
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone)]
pub enum KeyAction {
    Quit,
    Submit,
    Form(FormIntent),
}

pub fn handle_key<S: GenerationService>(app: &mut App<S>, key: KeyEvent) {
    let focus = app.form_state().focus;
    match map_key(focus, key) {
        Some(KeyAction::Quit) => app.request_quit(),
        Some(KeyAction::Submit) => app.submit(),
        Some(KeyAction::Form(intent)) => app.dispatch(intent),
        None => {}
    }
}

/// Translate a key press for the focused control.
pub fn map_key(focus: FormField, key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Raw mode delivers Ctrl+C as a key press.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        return Some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Tab => return Some(KeyAction::Form(FormIntent::FocusNext)),
        KeyCode::BackTab => return Some(KeyAction::Form(FormIntent::FocusPrev)),
        KeyCode::Enter => return Some(KeyAction::Submit),
        _ => {}
    }

    match focus {
        FormField::Prompt => match key.code {
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                Some(KeyAction::Form(FormIntent::InsertChar(ch)))
            }
            KeyCode::Backspace => Some(KeyAction::Form(FormIntent::DeleteChar)),
            _ => None,
        },
        FormField::TokenCount => slider_key(key).map(|step| {
            KeyAction::Form(match step {
                SliderKey::Step(delta) => FormIntent::StepTokenCount(delta),
                SliderKey::Min => FormIntent::SetTokenCount(TOKEN_COUNT_MIN as f64),
                SliderKey::Max => FormIntent::SetTokenCount(TOKEN_COUNT_MAX as f64),
            })
        }),
        FormField::Temperature => slider_key(key).map(|step| {
            KeyAction::Form(match step {
                SliderKey::Step(delta) => FormIntent::StepTemperature(delta),
                SliderKey::Min => FormIntent::SetTemperature(TEMPERATURE_MIN),
                SliderKey::Max => FormIntent::SetTemperature(TEMPERATURE_MAX),
            })
        }),
        FormField::Submit => match key.code {
            KeyCode::Char(' ') => Some(KeyAction::Submit),
            _ => None,
        },
    }
}

enum SliderKey {
    Step(i32),
    Min,
    Max,
}

fn slider_key(key: KeyEvent) -> Option<SliderKey> {
    match key.code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Some(SliderKey::Step(-1)),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(SliderKey::Step(1))
        }
        KeyCode::PageDown => Some(SliderKey::Step(-10)),
        KeyCode::PageUp => Some(SliderKey::Step(10)),
        KeyCode::Home => Some(SliderKey::Min),
        KeyCode::End => Some(SliderKey::Max),
        _ => None,
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_edits_prompt_only_when_focused() {
        let action = map_key(FormField::Prompt, press(KeyCode::Char('a')));
        assert!(matches!(
            action,
            Some(KeyAction::Form(FormIntent::InsertChar('a')))
        ));
        assert!(map_key(FormField::TokenCount, press(KeyCode::Char('a'))).is_none());
    }

    #[test]
    fn ctrl_q_and_esc_quit_from_any_field() {
        assert!(matches!(
            map_key(FormField::Prompt, ctrl('q')),
            Some(KeyAction::Quit)
        ));
        assert!(matches!(
            map_key(FormField::Temperature, press(KeyCode::Esc)),
            Some(KeyAction::Quit)
        ));
    }

    #[test]
    fn enter_submits_from_any_field() {
        for field in [
            FormField::Prompt,
            FormField::TokenCount,
            FormField::Temperature,
            FormField::Submit,
        ] {
            assert!(matches!(
                map_key(field, press(KeyCode::Enter)),
                Some(KeyAction::Submit)
            ));
        }
    }

    #[test]
    fn arrows_step_the_focused_slider() {
        assert!(matches!(
            map_key(FormField::TokenCount, press(KeyCode::Right)),
            Some(KeyAction::Form(FormIntent::StepTokenCount(1)))
        ));
        assert!(matches!(
            map_key(FormField::Temperature, press(KeyCode::Left)),
            Some(KeyAction::Form(FormIntent::StepTemperature(-1)))
        ));
        assert!(matches!(
            map_key(FormField::TokenCount, press(KeyCode::End)),
            Some(KeyAction::Form(FormIntent::SetTokenCount(max))) if max == 100.0
        ));
    }

    #[test]
    fn space_on_button_submits() {
        assert!(matches!(
            map_key(FormField::Submit, press(KeyCode::Char(' '))),
            Some(KeyAction::Submit)
        ));
        assert!(matches!(
            map_key(FormField::Prompt, press(KeyCode::Char(' '))),
            Some(KeyAction::Form(FormIntent::InsertChar(' ')))
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert!(map_key(FormField::Prompt, key).is_none());
    }
}
