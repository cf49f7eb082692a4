//! Form domain layer
//!
//! Type-safe state for the contact form: the four inputs and which one
//! has focus.

mod field;
mod form_state;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form, SUBMIT_BUTTON_INDEX};
