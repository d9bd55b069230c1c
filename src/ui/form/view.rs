use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

use crate::generation::{TEMPERATURE_MAX, TEMPERATURE_MIN, TOKEN_COUNT_MAX, TOKEN_COUNT_MIN};
use crate::ui::result::render_result;
use crate::ui::theme::{
    ACCENT, HEADER_TEXT, INPUT_BORDER, LABEL_TEXT, PLACEHOLDER_TEXT, SLIDER_TRACK,
};

use super::state::{FormField, FormState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TITLE: &str = "AI Text Generation";
const PROMPT_LABEL: &str = " Enter your question ";
const PROMPT_PLACEHOLDER: &str = "What would you like to know?";

/// Render the form and, below it, the result region.
pub fn render_form(frame: &mut Frame, area: Rect, state: &FormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(3), // prompt
            Constraint::Length(1),
            Constraint::Length(1), // tokens
            Constraint::Length(1),
            Constraint::Length(1), // temperature
            Constraint::Length(1),
            Constraint::Length(3), // submit
            Constraint::Length(1),
            Constraint::Min(0), // result
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    render_prompt(frame, rows[2], state);

    let token_ratio = slider_ratio(
        state.token_count as f64,
        TOKEN_COUNT_MIN as f64,
        TOKEN_COUNT_MAX as f64,
    );
    render_slider(
        frame,
        rows[4],
        format!("Number of tokens: {}", state.token_count),
        token_ratio,
        state.focus == FormField::TokenCount,
    );
    render_slider(
        frame,
        rows[6],
        format!("Temperature: {:.1}", state.temperature),
        slider_ratio(state.temperature, TEMPERATURE_MIN, TEMPERATURE_MAX),
        state.focus == FormField::Temperature,
    );

    render_submit(frame, rows[8], state);
    render_result(frame, rows[10], state);
}

fn render_prompt(frame: &mut Frame, area: Rect, state: &FormState) {
    let focused = state.focus == FormField::Prompt;
    let border = if focused { ACCENT } else { INPUT_BORDER };
    let block = Block::default()
        .title(PROMPT_LABEL)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let visible = visible_tail(&state.prompt, inner.width as usize);
    let line = if state.prompt.is_empty() {
        Line::from(Span::styled(
            PROMPT_PLACEHOLDER,
            Style::default().fg(PLACEHOLDER_TEXT),
        ))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(HEADER_TEXT)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = visible.chars().count() as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width - 1), inner.y));
    }
}

fn render_slider(frame: &mut Frame, area: Rect, label: String, ratio: f64, focused: bool) {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LABEL_TEXT)
    };
    let gauge = LineGauge::default()
        .label(Span::styled(format!("{:<24}", label), label_style))
        .ratio(ratio)
        .filled_style(Style::default().fg(ACCENT))
        .unfilled_style(Style::default().fg(SLIDER_TRACK));
    frame.render_widget(gauge, area);
}

fn render_submit(frame: &mut Frame, area: Rect, state: &FormState) {
    let label = if state.is_submitting {
        let spinner = SPINNER_FRAMES[(state.animation_tick as usize) % SPINNER_FRAMES.len()];
        format!("{} {}", spinner, state.submit_label())
    } else {
        state.submit_label().to_string()
    };

    let mut style = Style::default().fg(HEADER_TEXT).bg(ACCENT);
    if state.focus == FormField::Submit {
        style = style.add_modifier(Modifier::BOLD);
    }
    if !state.can_submit() {
        style = style.add_modifier(Modifier::DIM);
    }

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
    frame.render_widget(button, area);
}

/// Position of `value` on a `min..=max` track, always within `0.0..=1.0`.
fn slider_ratio(value: f64, min: f64, max: f64) -> f64 {
    let ratio = (value - min) / (max - min);
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Longest suffix of `text` that leaves one column free for the cursor.
fn visible_tail(text: &str, width: usize) -> &str {
    let capacity = width.saturating_sub(1);
    let count = text.chars().count();
    if count <= capacity {
        return text;
    }
    let skip = count - capacity;
    match text.char_indices().nth(skip) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}
