//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod theme;

use crate::app::App;
use layout::Breakpoint;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::BACKGROUND)), area);

    let breakpoint = Breakpoint::from_width(area.width);
    let (heading_area, form_area, status_area) = layout::create_layout(area, breakpoint);

    layout::draw_heading(frame, heading_area, breakpoint);
    forms::draw_contact_form(frame, form_area, app, breakpoint);
    layout::draw_status_bar(frame, status_area);

    if app.state.confirmation_visible() {
        components::render_confirmation_dialog(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::MockMailer;
    use crate::state::{FieldName, RequestId};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        App::with_mailer(Arc::new(MockMailer::new()), Duration::from_millis(2000))
    }

    #[test]
    fn test_empty_form_shows_all_error_labels() {
        let text = render(&app(), 80, 40);
        assert!(text.contains("K O N T A K T"));
        for field in FieldName::ALL {
            assert!(text.contains(field.error_label()), "{field} label missing");
        }
        assert!(text.contains(forms::SUBMIT_LABEL));
    }

    #[test]
    fn test_valid_fields_hide_their_labels() {
        let mut app = app();
        app.state.set_field(FieldName::Name, "Maximilian");
        app.state.set_field(FieldName::Subject, "Anfrage");
        let text = render(&app, 80, 40);

        assert!(!text.contains(FieldName::Name.error_label()));
        assert!(!text.contains(FieldName::Subject.error_label()));
        assert!(text.contains(FieldName::Email.error_label()));
        assert!(text.contains("Maximilian"));
    }

    #[test]
    fn test_narrow_terminal_uses_compact_heading() {
        let text = render(&app(), 40, 40);
        assert!(text.contains("KONTAKT"));
        assert!(!text.contains("K O N T A K T"));
    }

    #[test]
    fn test_confirmation_overlay_is_drawn() {
        let mut app = app();
        app.state.set_field(FieldName::Name, "Maximilian");
        app.state.mark_dispatched(RequestId(1));
        app.state
            .apply_success(RequestId(1), Instant::now(), Duration::from_secs(60));

        let text = render(&app, 80, 40);
        assert!(text.contains(components::CONFIRMATION_TEXT));
    }
}
