//! Application state definitions

use super::forms::{ContactForm, FieldName, Form};
use super::submission::{Confirmation, RequestId, SubmissionTracker};
use super::validation::{self, ValidationResult};
use std::time::{Duration, Instant};

/// Everything the contact widget renders from
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ContactForm,
    /// Always `validation::evaluate(&form)`; refreshed on every edit
    validation: ValidationResult,
    /// Inline error labels are hidden after a dispatch until the next edit
    pub errors_visible: bool,
    pub submission: SubmissionTracker,
    pub confirmation: Option<Confirmation>,
}

impl Default for AppState {
    fn default() -> Self {
        let form = ContactForm::new();
        let validation = validation::evaluate(&form);
        Self {
            form,
            validation,
            errors_visible: true,
            submission: SubmissionTracker::default(),
            confirmation: None,
        }
    }
}

impl AppState {
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Whether the inline error for `field` should be drawn
    pub fn shows_error(&self, field: FieldName) -> bool {
        self.errors_visible && !self.validation.is_valid && self.validation.has_error(field)
    }

    /// Type a character into the focused input
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
            self.on_edit();
        }
    }

    /// Delete the last character of the focused input
    pub fn pop_char(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
            self.on_edit();
        }
    }

    /// Replace a field value wholesale
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.form.field_mut(name).set_text(value);
        self.on_edit();
    }

    fn on_edit(&mut self) {
        self.revalidate();
        self.errors_visible = true;
    }

    fn revalidate(&mut self) {
        self.validation = validation::evaluate(&self.form);
    }

    /// A submission passed the gate and was handed to the dispatcher
    pub fn mark_dispatched(&mut self, id: RequestId) {
        self.submission.begin(id, self.form.clone());
        self.errors_visible = false;
    }

    /// A submission was attempted but did not pass the gate
    pub fn mark_rejected(&mut self) {
        self.revalidate();
        self.errors_visible = true;
    }

    /// Apply a successful send: show the confirmation and clear the form,
    /// unless it was edited after this request went out
    pub fn apply_success(&mut self, id: RequestId, now: Instant, duration: Duration) {
        let Some(sent) = self.submission.settle(id, Ok(())) else {
            return;
        };
        if self.form.same_values(&sent) {
            self.form.reset();
            self.revalidate();
            self.errors_visible = false;
        } else {
            tracing::debug!(request = %id, "Form edited since dispatch, keeping input");
        }
        self.confirmation = Some(Confirmation::new(now, duration));
    }

    /// Apply a failed send. The form keeps its values.
    pub fn apply_failure(&mut self, id: RequestId, reason: String) {
        self.submission.settle(id, Err(reason));
    }

    /// Hide the confirmation once its duration has passed
    pub fn tick(&mut self, now: Instant) {
        if self
            .confirmation
            .is_some_and(|c| c.is_expired_at(now))
        {
            self.confirmation = None;
        }
    }

    pub fn confirmation_visible(&self) -> bool {
        self.confirmation.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestStatus;

    fn filled_state() -> AppState {
        let mut state = AppState::default();
        state.set_field(FieldName::Name, "Maximilian");
        state.set_field(FieldName::Email, "max@example.de");
        state.set_field(FieldName::Subject, "Anfrage");
        state.set_field(FieldName::Message, "Hallo, ich habe eine Frage.");
        state
    }

    #[test]
    fn test_default_state_is_invalid_and_shows_errors() {
        let state = AppState::default();
        assert!(!state.validation().is_valid);
        for field in FieldName::ALL {
            assert!(state.shows_error(field));
        }
    }

    #[test]
    fn test_validation_follows_each_keystroke() {
        let mut state = AppState::default();
        for c in "Maxim".chars() {
            state.push_char(c);
        }
        assert!(state.validation().has_error(FieldName::Name));
        state.push_char('i');
        assert!(!state.validation().has_error(FieldName::Name));
        state.pop_char();
        assert!(state.validation().has_error(FieldName::Name));
    }

    #[test]
    fn test_typing_on_submit_row_is_ignored() {
        let mut state = AppState::default();
        state.form.set_active_field(crate::state::SUBMIT_BUTTON_INDEX);
        state.push_char('x');
        for field in FieldName::ALL {
            assert!(state.form.field(field).is_empty());
        }
    }

    #[test]
    fn test_dispatch_hides_errors_until_next_edit() {
        let mut state = AppState::default();
        state.set_field(FieldName::Name, "Max");
        state.mark_dispatched(RequestId(1));
        assert!(!state.shows_error(FieldName::Name));
        state.push_char('x');
        assert!(state.shows_error(FieldName::Name));
    }

    #[test]
    fn test_success_clears_form_and_shows_confirmation() {
        let mut state = filled_state();
        state.mark_dispatched(RequestId(1));
        let now = Instant::now();
        state.apply_success(RequestId(1), now, Duration::from_millis(2000));

        assert_eq!(state.form, ContactForm::new());
        assert_eq!(state.submission.status(), &RequestStatus::Succeeded);
        assert!(state.confirmation_visible());

        state.tick(now + Duration::from_millis(1999));
        assert!(state.confirmation_visible());
        state.tick(now + Duration::from_millis(2000));
        assert!(!state.confirmation_visible());
    }

    #[test]
    fn test_success_keeps_edits_made_after_dispatch() {
        let mut state = filled_state();
        state.mark_dispatched(RequestId(1));
        state.set_field(FieldName::Message, "Zweite Nachricht, noch nicht gesendet");
        let edited = state.form.clone();

        state.apply_success(RequestId(1), Instant::now(), Duration::from_millis(2000));

        assert_eq!(state.form, edited);
        assert!(state.confirmation_visible());
        assert_eq!(state.submission.status(), &RequestStatus::Succeeded);
    }

    #[test]
    fn test_success_clears_form_when_only_focus_moved() {
        let mut state = filled_state();
        state.mark_dispatched(RequestId(1));
        state.form.next_field();
        state.apply_success(RequestId(1), Instant::now(), Duration::from_millis(2000));
        assert_eq!(state.form, ContactForm::new());
    }

    #[test]
    fn test_failure_keeps_form_populated() {
        let mut state = filled_state();
        let before = state.form.clone();
        state.mark_dispatched(RequestId(1));
        state.apply_failure(RequestId(1), "boom".to_string());

        assert_eq!(state.form, before);
        assert!(!state.confirmation_visible());
        assert_eq!(
            state.submission.status(),
            &RequestStatus::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_valid_form_shows_no_errors() {
        let state = filled_state();
        assert!(state.validation().is_valid);
        for field in FieldName::ALL {
            assert!(!state.shows_error(field));
        }
    }
}
