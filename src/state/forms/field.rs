//! Form field value objects

use std::fmt;

/// Identifies one of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Key used in the email template parameters
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Placeholder shown in the input border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "E-Mail",
            Self::Subject => "Betreff",
            Self::Message => "Nachricht",
        }
    }

    /// Inline error label shown when the field fails its rule
    pub fn error_label(&self) -> &'static str {
        match self {
            Self::Name => "Bitte Name eingeben",
            Self::Email => "Bitte vollständige Email eingeben",
            Self::Subject => "Bitte Betreff eingeben",
            Self::Message => "Bitte Nachricht eingeben",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
            is_multiline: name.is_multiline(),
        }
    }

    /// Create a field with an initial value
    #[cfg(test)]
    pub fn with_value(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::new(name)
        }
    }

    /// Placeholder and border title
    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the whole value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value.
    /// Newlines are dropped on single-line fields.
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Length in characters, as used by the validation thresholds
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_takes_label_from_name() {
        let field = FormField::new(FieldName::Subject);
        assert_eq!(field.label(), "Betreff");
        assert!(field.is_empty());
        assert!(!field.is_multiline);
    }

    #[test]
    fn test_message_field_is_multiline() {
        let mut field = FormField::new(FieldName::Message);
        field.push_char('a');
        field.push_char('\n');
        field.push_char('b');
        assert_eq!(field.as_text(), "a\nb");
    }

    #[test]
    fn test_single_line_field_drops_newline() {
        let mut field = FormField::with_value(FieldName::Name, "Max");
        field.push_char('\n');
        assert_eq!(field.as_text(), "Max");
    }

    #[test]
    fn test_pop_and_clear() {
        let mut field = FormField::with_value(FieldName::Email, "a@b.de");
        field.pop_char();
        assert_eq!(field.as_text(), "a@b.d");
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_char_len_counts_scalar_values() {
        let field = FormField::with_value(FieldName::Name, "Jürgen");
        assert_eq!(field.char_len(), 6);
    }

    #[test]
    fn test_field_name_display_uses_template_key() {
        assert_eq!(FieldName::Message.to_string(), "message");
    }
}
