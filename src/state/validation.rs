//! Field shape validation and the submit gate
//!
//! Two predicates live here and they intentionally disagree:
//! [`evaluate`] drives the inline error labels using length and shape
//! thresholds, while [`passes_submit_gate`] only requires name, subject and
//! message to be non-empty. Submissions at the threshold lengths therefore
//! show errors and still go out.

use super::forms::{ContactForm, FieldName};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,6}$").expect("email pattern is valid")
});

/// Name must be longer than this many characters
pub const NAME_MIN_EXCLUSIVE: usize = 5;
/// Subject must be longer than this many characters
pub const SUBJECT_MIN_EXCLUSIVE: usize = 3;
/// Message must be longer than this many characters
pub const MESSAGE_MIN_EXCLUSIVE: usize = 10;

/// Permissive `local@domain.tld` check with a 2-6 character TLD.
/// Not an RFC 5322 validator.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Outcome of validating the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub field_errors: BTreeSet<FieldName>,
}

impl ValidationResult {
    pub fn has_error(&self, field: FieldName) -> bool {
        self.field_errors.contains(&field)
    }
}

/// Validate all fields against their display rules
pub fn evaluate(form: &ContactForm) -> ValidationResult {
    let mut field_errors = BTreeSet::new();

    if form.name.char_len() <= NAME_MIN_EXCLUSIVE {
        field_errors.insert(FieldName::Name);
    }
    if !is_valid_email(form.email.as_text()) {
        field_errors.insert(FieldName::Email);
    }
    if form.subject.char_len() <= SUBJECT_MIN_EXCLUSIVE {
        field_errors.insert(FieldName::Subject);
    }
    if form.message.char_len() <= MESSAGE_MIN_EXCLUSIVE {
        field_errors.insert(FieldName::Message);
    }

    ValidationResult {
        is_valid: field_errors.is_empty(),
        field_errors,
    }
}

/// Whether a submission is forwarded to the mailer.
/// Email is not checked and neither are the length thresholds.
pub fn passes_submit_gate(form: &ContactForm) -> bool {
    !form.name.is_empty() && !form.subject.is_empty() && !form.message.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm::with_values(name, email, subject, message)
    }

    #[test]
    fn test_valid_email_shapes() {
        for email in [
            "max@example.de",
            "a.b+c@sub.domain.info",
            "x@y.museum",
            "ä@ü.com",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_email_shapes_are_flagged() {
        for email in [
            "",
            "max",
            "max@",
            "@example.de",
            "max@example",
            "max@example.d",
            "max@example.toolong",
            "max mustermann@example.de",
            "max@@example.de",
            "max@exa mple.de",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
            let result = evaluate(&form("Maximilian", email, "Anfrage", "Hallo, wie geht's?"));
            assert!(result.has_error(FieldName::Email), "{email} not flagged");
            assert!(!result.is_valid);
        }
    }

    #[test]
    fn test_name_threshold() {
        let short = evaluate(&form("Maxim", "max@example.de", "Anfrage", "Hallo Welt!!"));
        assert!(short.has_error(FieldName::Name));

        let ok = evaluate(&form("Maximi", "max@example.de", "Anfrage", "Hallo Welt!!"));
        assert!(!ok.has_error(FieldName::Name));
        assert!(ok.is_valid);
    }

    #[test]
    fn test_subject_and_message_thresholds() {
        let result = evaluate(&form("Maximi", "max@example.de", "Hey!", "1234567890"));
        assert_eq!(
            result.field_errors,
            BTreeSet::from([FieldName::Subject, FieldName::Message])
        );

        let result = evaluate(&form("Maximi", "max@example.de", "Hey!!", "12345678901"));
        assert!(result.field_errors.is_empty());
    }

    #[test]
    fn test_empty_form_flags_everything() {
        let result = evaluate(&ContactForm::new());
        assert_eq!(result.field_errors.len(), 4);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let f = form("Maxnn", "bad", "Hey!", "short");
        assert_eq!(evaluate(&f), evaluate(&f));
    }

    #[test]
    fn test_gate_ignores_thresholds_and_email() {
        let f = form("Maxnn", "", "Hey!", "1234567890");
        assert!(passes_submit_gate(&f));
        assert!(!evaluate(&f).is_valid);
    }

    #[test]
    fn test_gate_requires_message() {
        assert!(!passes_submit_gate(&form(
            "Maximilian",
            "max@example.de",
            "Anfrage",
            ""
        )));
        assert!(!passes_submit_gate(&form("", "max@example.de", "Anfrage", "Hallo")));
        assert!(!passes_submit_gate(&form("Max", "max@example.de", "", "Hallo")));
    }
}
