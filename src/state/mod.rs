//! Application state module

mod app_state;
mod forms;
mod submission;
pub mod validation;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
