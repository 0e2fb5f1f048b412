//! Feedback form state and validation.
//!
//! The form is submit-gated: typing into a field never validates anything.
//! Only [`FeedbackForm::submit`] runs [`validate`] over all six fields at once
//! and replaces the error map with the result. Submission is local; nothing
//! leaves the process.

use std::collections::BTreeMap;

use crate::validators::{is_email, is_phone};

/// Fields of the feedback form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeedbackField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Country,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 6] = [
        FeedbackField::FirstName,
        FeedbackField::LastName,
        FeedbackField::Email,
        FeedbackField::Phone,
        FeedbackField::Address,
        FeedbackField::Country,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackField::FirstName => "First Name",
            FeedbackField::LastName => "Last Name",
            FeedbackField::Email => "Email",
            FeedbackField::Phone => "Phone",
            FeedbackField::Address => "Address",
            FeedbackField::Country => "Country",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FeedbackField::FirstName => "John",
            FeedbackField::LastName => "Doe",
            FeedbackField::Email => "example@sample.com",
            FeedbackField::Phone => "+911234567890",
            FeedbackField::Address => "123 Main St, City",
            FeedbackField::Country => "Country",
        }
    }

    /// Message shown when the field fails validation
    pub fn error_message(&self) -> &'static str {
        match self {
            FeedbackField::FirstName => "First name is required",
            FeedbackField::LastName => "Last name is required",
            FeedbackField::Email => "A valid email is required",
            FeedbackField::Phone => "A valid phone is required (digits, optional +)",
            FeedbackField::Address => "Address is required",
            FeedbackField::Country => "Country is required",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next field, wrapping from the last back to the first.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping from the first to the last.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Field name to error message; empty means the form is valid
pub type FieldErrors = BTreeMap<FeedbackField, String>;

/// Raw text of the six fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl FeedbackValues {
    pub fn get(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::FirstName => &self.first_name,
            FeedbackField::LastName => &self.last_name,
            FeedbackField::Email => &self.email,
            FeedbackField::Phone => &self.phone,
            FeedbackField::Address => &self.address,
            FeedbackField::Country => &self.country,
        }
    }

    pub fn get_mut(&mut self, field: FeedbackField) -> &mut String {
        match field {
            FeedbackField::FirstName => &mut self.first_name,
            FeedbackField::LastName => &mut self.last_name,
            FeedbackField::Email => &mut self.email,
            FeedbackField::Phone => &mut self.phone,
            FeedbackField::Address => &mut self.address,
            FeedbackField::Country => &mut self.country,
        }
    }
}

fn field_passes(field: FeedbackField, value: &str) -> bool {
    match field {
        FeedbackField::Email => is_email(value),
        FeedbackField::Phone => is_phone(value),
        _ => !value.trim().is_empty(),
    }
}

/// Check every field and collect an error for each one that fails.
///
/// Name, address and country only need non-blank content. Email and phone
/// are checked untrimmed against their validators.
pub fn validate(values: &FeedbackValues) -> FieldErrors {
    FeedbackField::ALL
        .iter()
        .filter(|field| !field_passes(**field, values.get(**field)))
        .map(|field| (*field, field.error_message().to_string()))
        .collect()
}

/// Transient state of an open feedback form.
///
/// A new form is created every time the modal opens and dropped when it
/// closes, so nothing carries over between openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    pub values: FeedbackValues,
    pub errors: FieldErrors,
    pub submitted: bool,
    pub focus: FeedbackField,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            values: FeedbackValues::default(),
            errors: FieldErrors::new(),
            submitted: false,
            focus: FeedbackField::FirstName,
        }
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FeedbackField) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: FeedbackField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Replace the content of a field. Does not validate.
    pub fn set_value(&mut self, field: FeedbackField, value: impl Into<String>) {
        if self.submitted {
            return;
        }
        *self.values.get_mut(field) = value.into();
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        if self.submitted || c.is_control() {
            return;
        }
        self.values.get_mut(self.focus).push(c);
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.submitted {
            return;
        }
        self.values.get_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate all fields and, if they pass, mark the form submitted.
    ///
    /// Returns whether the submission went through. Focus moves to the first
    /// failing field so it can be fixed straight away.
    pub fn submit(&mut self) -> bool {
        if self.submitted {
            return true;
        }
        self.errors = validate(&self.values);
        if let Some(first) = self.errors.keys().next() {
            self.focus = *first;
            return false;
        }
        self.submitted = true;
        true
    }
}
