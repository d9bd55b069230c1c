use crate::ui::form::{FormField, FormState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// One key hint: the key and what it does.
type Hint = (&'static str, &'static str);

/// Key hints that apply to the focused control.
///
/// The submit hints are left out while a generation is in flight, since the
/// trigger is disabled then.
pub fn key_hints(state: &FormState) -> Vec<Hint> {
    let mut hints = vec![("Tab", "Next field")];
    match state.focus {
        FormField::Prompt => hints.push(("Bksp", "Delete")),
        FormField::TokenCount | FormField::Temperature => {
            hints.push(("←/→", "Adjust"));
            hints.push(("PgUp/PgDn", "Jump"));
            hints.push(("Home/End", "Min/Max"));
        }
        FormField::Submit if state.can_submit() => hints.push(("Space", "Generate")),
        FormField::Submit => {}
    }
    if state.can_submit() {
        hints.push(("Enter", "Generate"));
    }
    hints.push(("Ctrl+Q", "Quit"));
    hints
}

pub struct Footer<'a> {
    state: &'a FormState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (i, (key, action)) in key_hints(self.state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
                used += SEPARATOR.chars().count();
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(": {}", action), text_style));
            used += key.chars().count() + 2 + action.chars().count();
        }

        // Right-align the version inside the borders.
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
