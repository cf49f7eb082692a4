//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default()
            .fg(theme::FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::BORDER)
    };
    let input_style = Style::default().fg(theme::INPUT_FG).bg(theme::INPUT_BG);
    let placeholder_style = Style::default().fg(theme::PLACEHOLDER).bg(theme::INPUT_BG);

    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, input_style);

    let content = if field.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(field.label(), placeholder_style)))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), input_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), input_style),
            cursor_span,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme::INPUT_BG));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error label below a field
pub fn draw_error_label(frame: &mut Frame, area: Rect, message: &str) {
    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(theme::ERROR_FG),
    )));
    frame.render_widget(label, area);
}
