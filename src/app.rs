//! Application state and core logic

use crate::config::KontaktConfig;
use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::mailer::{EmailJsClient, EmailPayload, Mailer};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::validation::passes_submit_gate;
use crate::state::{AppState, Form, RequestId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sends submissions to the email service
    dispatcher: Dispatcher,
    /// How long the confirmation overlay stays up
    confirmation_duration: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to EmailJS with the given configuration
    pub fn new(config: &KontaktConfig) -> Result<Self> {
        let mailer = EmailJsClient::new(config)?;
        Ok(Self::with_mailer(
            Arc::new(mailer),
            config.confirmation_duration(),
        ))
    }

    /// Create an App with any mailer implementation
    pub fn with_mailer(mailer: Arc<dyn Mailer>, confirmation_duration: Duration) -> Self {
        Self {
            state: AppState::default(),
            dispatcher: Dispatcher::new(mailer),
            confirmation_duration,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request shutdown. In-flight sends are aborted when the app drops.
    pub fn quit(&mut self) {
        let in_flight = self.state.submission.in_flight();
        if in_flight > 0 {
            tracing::warn!("Quitting with {in_flight} unsent submissions");
        }
        self.quit = true;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.form.is_submit_focused();

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if on_submit => {
                self.submit();
            }
            KeyCode::Enter if self.state.form.is_active_field_multiline() => {
                self.state.push_char('\n');
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Backspace => self.state.pop_char(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.push_char(c);
            }
            _ => {}
        }
    }

    /// Submit the form. Returns the request id if a send was started.
    ///
    /// The gate only checks that name, subject and message are non-empty;
    /// a form that fails validation can still go out.
    pub fn submit(&mut self) -> Option<RequestId> {
        if !passes_submit_gate(&self.state.form) {
            tracing::debug!("Submit ignored: name, subject or message is empty");
            self.state.mark_rejected();
            return None;
        }

        let validation = self.state.validation();
        if !validation.is_valid {
            tracing::warn!(
                fields = ?validation.field_errors,
                "Dispatching a submission that fails field validation"
            );
        }

        let id = self
            .dispatcher
            .dispatch(EmailPayload::from_form(&self.state.form));
        self.state.mark_dispatched(id);
        Some(id)
    }

    /// Apply finished sends and expire the confirmation
    pub fn tick(&mut self) {
        let now = Instant::now();
        for outcome in self.dispatcher.drain() {
            self.apply_outcome(outcome, now);
        }
        self.state.tick(now);
    }

    fn apply_outcome(&mut self, outcome: DispatchOutcome, now: Instant) {
        match outcome.result {
            Ok(text) => {
                tracing::info!(request = %outcome.id, response = %text, "Contact submission sent");
                self.state
                    .apply_success(outcome.id, now, self.confirmation_duration);
            }
            Err(err) => {
                tracing::error!(request = %outcome.id, "Contact submission failed: {err}");
                self.state.apply_failure(outcome.id, err.to_string());
            }
        }
        tracing::debug!(status = ?self.state.submission.status(), "Submission settled");
    }

    /// Wait for the next send to finish and apply it
    #[cfg(test)]
    async fn settle_next(&mut self, now: Instant) -> Option<RequestId> {
        let outcome = self.dispatcher.next_outcome().await?;
        let id = outcome.id;
        self.apply_outcome(outcome, now);
        Some(id)
    }
}
