//! Email delivery module for the EmailJS REST API

mod client;
mod error;
mod traits;

pub use client::{EmailJsClient, EmailPayload};
pub use error::MailerError;
pub use traits::Mailer;

#[cfg(test)]
pub use traits::MockMailer;
