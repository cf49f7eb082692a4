//! Layout components (heading, form placement, status bar)

use super::theme;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Responsive size classes, picked from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Room for the offset layout
    Wide,
    /// Centered fixed-width form
    Medium,
    /// Form takes the full width
    Narrow,
}

impl Breakpoint {
    const WIDE_MIN: u16 = 100;
    const MEDIUM_MIN: u16 = 55;

    pub fn from_width(width: u16) -> Self {
        if width >= Self::WIDE_MIN {
            Self::Wide
        } else if width >= Self::MEDIUM_MIN {
            Self::Medium
        } else {
            Self::Narrow
        }
    }

    /// Horizontal padding inside the form panel
    pub fn form_padding(&self) -> u16 {
        match self {
            Self::Wide | Self::Medium => 3,
            Self::Narrow => 1,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Wide | Self::Medium => "K O N T A K T",
            Self::Narrow => "KONTAKT",
        }
    }
}

/// Split the screen into heading, form and status bar
pub fn create_layout(area: Rect, breakpoint: Breakpoint) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let form_row = rows[1];
    let form_area = match breakpoint {
        // Offset from the left edge, like the wide page layout
        Breakpoint::Wide => Rect {
            x: form_row.x + 12,
            width: 60.min(form_row.width.saturating_sub(12)),
            ..form_row
        },
        Breakpoint::Medium => {
            let width = 50.min(form_row.width);
            Rect {
                x: form_row.x + (form_row.width - width) / 2,
                width,
                ..form_row
            }
        }
        Breakpoint::Narrow => form_row,
    };

    let heading_area = Rect {
        x: form_area.x,
        width: form_area.width,
        ..rows[0]
    };

    (heading_area, form_area, rows[2])
}

/// Draw the page heading
pub fn draw_heading(frame: &mut Frame, area: Rect, breakpoint: Breakpoint) {
    let heading = Paragraph::new(Line::from(Span::styled(
        breakpoint.heading(),
        Style::default()
            .fg(theme::HEADING)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, area);
}

/// Draw the bottom status bar with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let spans = vec![Span::raw(format!(
        " Tab:next  Shift+Tab:prev  Enter:next/send  {SUBMIT_SHORTCUT}:send  Esc:quit"
    ))];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::STATUS_BAR));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(140), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(55), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(54), Breakpoint::Narrow);
    }

    #[test]
    fn test_wide_layout_is_offset() {
        let (_, form, status) = create_layout(Rect::new(0, 0, 120, 40), Breakpoint::Wide);
        assert_eq!(form.x, 12);
        assert_eq!(form.width, 60);
        assert_eq!(status.y, 39);
    }

    #[test]
    fn test_medium_layout_is_centered() {
        let (heading, form, _) = create_layout(Rect::new(0, 0, 80, 30), Breakpoint::Medium);
        assert_eq!(form.x, 15);
        assert_eq!(form.width, 50);
        assert_eq!(heading.x, form.x);
    }

    #[test]
    fn test_narrow_layout_uses_full_width() {
        let (_, form, _) = create_layout(Rect::new(0, 0, 40, 30), Breakpoint::Narrow);
        assert_eq!(form.x, 0);
        assert_eq!(form.width, 40);
        assert_eq!(Breakpoint::Narrow.form_padding(), 1);
    }
}
