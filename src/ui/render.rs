use crate::ui::footer::Footer;
use crate::ui::form::{render_form, FormState};
use crate::ui::header::Header;
use crate::ui::layout::{centered_column, layout_regions, FORM_MAX_WIDTH};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, state: &FormState, endpoint: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(endpoint).widget(state), header);
    frame.render_widget(Clear, body);
    render_form(frame, centered_column(body, FORM_MAX_WIDTH), state);
    frame.render_widget(Footer::new(state).widget(footer), footer);
}
