//! Contact form rendering

use super::field_renderer::{draw_error_label, draw_field};
use crate::app::App;
use crate::state::{FieldName, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::Breakpoint;
use crate::ui::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// Height of a single-line input
const FIELD_HEIGHT: u16 = 3;
/// Minimum height of the message textarea
const MESSAGE_MIN_HEIGHT: u16 = 6;
/// Row reserved under each input for its error label
const ERROR_HEIGHT: u16 = 1;

pub const SUBMIT_LABEL: &str = "Nachricht senden";

/// Draw the four inputs, their error labels and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App, breakpoint: Breakpoint) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().bg(theme::PANEL));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padding = breakpoint.form_padding();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),       // Name
            Constraint::Length(ERROR_HEIGHT),       // Name error
            Constraint::Length(FIELD_HEIGHT),       // Email
            Constraint::Length(ERROR_HEIGHT),       // Email error
            Constraint::Length(FIELD_HEIGHT),       // Subject
            Constraint::Length(ERROR_HEIGHT),       // Subject error
            Constraint::Min(MESSAGE_MIN_HEIGHT),    // Message
            Constraint::Length(ERROR_HEIGHT),       // Message error
            Constraint::Length(BUTTON_HEIGHT),      // Submit
        ])
        .horizontal_margin(padding)
        .vertical_margin(padding.min(1))
        .split(inner);

    let form = &app.state.form;
    for (idx, name) in FieldName::ALL.iter().enumerate() {
        let field_area = chunks[idx * 2];
        let error_area = chunks[idx * 2 + 1];
        draw_field(
            frame,
            field_area,
            form.field(*name),
            form.active_field() == idx,
        );
        if app.state.shows_error(*name) {
            draw_error_label(frame, error_area, name.error_label());
        }
    }

    let fill = if app.state.validation().is_valid {
        theme::BUTTON_READY
    } else {
        theme::BUTTON
    };
    render_button(
        frame,
        button_area(chunks[8]),
        SUBMIT_LABEL,
        form.is_submit_focused(),
        fill,
    );
}

/// The button spans 60% of the row, centered
fn button_area(row: Rect) -> Rect {
    let three_fifths = (u32::from(row.width) * 3 / 5) as u16;
    let width = three_fifths
        .max(SUBMIT_LABEL.chars().count() as u16 + 4)
        .min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        width,
        ..row
    }
}
