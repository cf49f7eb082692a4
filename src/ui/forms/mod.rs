//! Form rendering module
//!
//! - `field_renderer`: input and error label rendering
//! - `contact_form`: the contact form with its submit button

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
#[cfg(test)]
pub use contact_form::SUBMIT_LABEL;
