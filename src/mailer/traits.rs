//! Trait abstraction for the email delivery service to enable mocking in tests

use super::client::EmailPayload;
use super::error::MailerError;
use async_trait::async_trait;

/// Trait for sending a contact submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one submission. Returns the service's response text.
    async fn send(&self, payload: EmailPayload) -> Result<String, MailerError>;
}
