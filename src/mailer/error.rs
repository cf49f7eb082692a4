//! Errors surfaced by the email delivery client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    /// Building the HTTP client failed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("email request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("email service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}
