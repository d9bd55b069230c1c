//! Read-only region showing the last outcome.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::form::FormState;
use crate::ui::theme::{HEADER_TEXT, INPUT_BORDER, LABEL_TEXT, STATUS_ERROR};

const HEADING: &str = " Generated Response: ";

/// Draw `result_text` in a bordered block. Draws nothing when it is empty.
pub fn render_result(frame: &mut Frame, area: Rect, state: &FormState) {
    if state.result_text.is_empty() || area.height == 0 {
        return;
    }

    let border = if state.result_is_error {
        STATUS_ERROR
    } else {
        INPUT_BORDER
    };
    let block = Block::default()
        .title(HEADING)
        .title_style(Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let paragraph = Paragraph::new(state.result_text.as_str())
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
