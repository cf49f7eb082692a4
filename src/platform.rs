//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit shortcut.
/// Terminals rarely forward Cmd, so Ctrl is used on every platform.
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
