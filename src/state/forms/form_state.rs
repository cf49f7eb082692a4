//! Contact form state and focus handling

use super::field::{FieldName, FormField};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// The four contact inputs plus focus position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    /// 0-3 are the inputs, 4 is the submit button
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            subject: FormField::new(FieldName::Subject),
            message: FormField::new(FieldName::Message),
            active_field_index: 0,
        }
    }

    /// Build a form with all four values filled in
    #[cfg(test)]
    pub fn with_values(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: FormField::with_value(FieldName::Name, name),
            email: FormField::with_value(FieldName::Email, email),
            subject: FormField::with_value(FieldName::Subject, subject),
            message: FormField::with_value(FieldName::Message, message),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    /// Returns true if the submit button currently has focus
    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Field name that currently has focus, if any
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// True when all four values equal those of `other`, ignoring focus
    pub fn same_values(&self, other: &ContactForm) -> bool {
        FieldName::ALL
            .iter()
            .all(|name| self.field(*name).as_text() == other.field(*name).as_text())
    }

    /// Clear all values and move focus back to the first input
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
