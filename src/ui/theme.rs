//! Colors shared by the contact widget

use ratatui::style::Color;

/// Page background
pub const BACKGROUND: Color = Color::Rgb(92, 92, 255);
/// Form panel, a touch lighter than the page
pub const PANEL: Color = Color::Rgb(112, 112, 255);
pub const HEADING: Color = Color::Black;

pub const INPUT_BG: Color = Color::White;
pub const INPUT_FG: Color = Color::Black;
pub const PLACEHOLDER: Color = Color::DarkGray;
pub const BORDER: Color = Color::Gray;
pub const FOCUS: Color = Color::Rgb(0, 0, 255);

pub const ERROR_FG: Color = Color::Rgb(0, 0, 160);

/// Submit button while the form fails validation
pub const BUTTON: Color = Color::Rgb(0, 0, 255);
/// Submit button once every field passes
pub const BUTTON_READY: Color = Color::Green;

pub const STATUS_BAR: Color = Color::DarkGray;
