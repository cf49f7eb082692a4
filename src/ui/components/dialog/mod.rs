//! Dialog components for TUI

mod base;
mod confirmation_dialog;

pub use confirmation_dialog::render_confirmation_dialog;
#[cfg(test)]
pub use confirmation_dialog::CONFIRMATION_TEXT;
