//! HTTP client for the EmailJS delivery API
//!
//! Submissions are posted as JSON to the `email/send` endpoint using the
//! service id, template id and public key from the configuration. The form
//! values travel unchanged as template parameters.

use super::error::MailerError;
use super::traits::Mailer;
use crate::config::{Credentials, KontaktConfig};
use crate::state::{ContactForm, FieldName};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Raw form values as sent to the email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl EmailPayload {
    /// Snapshot the current form values without trimming or validation
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            name: form.field(FieldName::Name).as_text().to_string(),
            email: form.field(FieldName::Email).as_text().to_string(),
            subject: form.field(FieldName::Subject).as_text().to_string(),
            message: form.field(FieldName::Message).as_text().to_string(),
        }
    }
}

/// Request body understood by the EmailJS REST API
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a EmailPayload,
}

/// Client for the EmailJS send endpoint
pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl EmailJsClient {
    /// Create a client from configuration. Fails if a credential is missing.
    pub fn new(config: &KontaktConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .map_err(MailerError::Client)?;

        Ok(Self {
            http,
            endpoint: config.endpoint().to_string(),
            credentials,
        })
    }

    fn request_body<'a>(&'a self, payload: &'a EmailPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            access_token: self.credentials.access_token.as_deref(),
            template_params: payload,
        }
    }
}

#[async_trait]
impl Mailer for EmailJsClient {
    async fn send(&self, payload: EmailPayload) -> Result<String, MailerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request_body(&payload))
            .send()
            .await
            .map_err(MailerError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(MailerError::Transport)?;
        interpret_response(status, body)
    }
}

/// Map an HTTP answer to the delivery outcome. Only 200 counts as sent.
fn interpret_response(status: StatusCode, body: String) -> Result<String, MailerError> {
    if status == StatusCode::OK {
        Ok(body)
    } else {
        Err(MailerError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
