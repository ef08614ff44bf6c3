//! Contact form validation.
//!
//! Each field revalidates on every input; submit revalidates all three and
//! only accepts the form when every field passes. Delivery of accepted
//! submissions is out of scope: they are logged and acknowledged locally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::{Effect, EventKind, Handler, Listener, Target};
use crate::types::FieldName;

/// Acknowledgment shown after an accepted submission
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Why a field failed validation. `Display` is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,
    #[error("Email cannot be empty.")]
    EmptyEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message cannot be empty.")]
    EmptyMessage,
}

/// Loose `local@domain.tld` shape check.
///
/// No whitespace, exactly one `@` with a non-empty local part, and a dot in
/// the domain with at least one character on each side. Deliberately much
/// looser than RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whitespace as JavaScript's `trim` and `\s` define it.
///
/// Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_space)
}

/// Validate a single field value.
pub fn validate(field: FieldName, value: &str) -> Result<(), ValidationError> {
    let value = js_trim(value);
    match field {
        FieldName::Name if value.is_empty() => Err(ValidationError::EmptyName),
        FieldName::Email if value.is_empty() => Err(ValidationError::EmptyEmail),
        FieldName::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldName::Message if value.is_empty() => Err(ValidationError::EmptyMessage),
        _ => Ok(()),
    }
}

/// Displayed validation state of one field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValidation {
    pub invalid: bool,
    pub message: String,
}

impl FieldValidation {
    fn clear(&mut self) {
        self.invalid = false;
        self.message.clear();
    }

    fn set(&mut self, error: ValidationError) {
        self.invalid = true;
        self.message = error.to_string();
    }
}

/// Trimmed values of an accepted form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
struct FieldState {
    value: String,
    validation: FieldValidation,
}

#[derive(Clone, Debug)]
pub struct ContactFormValidator {
    fields: HashMap<FieldName, FieldState>,
}

impl Default for ContactFormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormValidator {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL
                .iter()
                .map(|&f| (f, FieldState::default()))
                .collect(),
        }
    }

    pub fn listeners(&self) -> Vec<Listener> {
        let mut listeners: Vec<Listener> = FieldName::ALL
            .iter()
            .map(|&f| Listener::new(EventKind::Input, Target::Field(f), Handler::ValidateField(f)))
            .collect();
        listeners.push(Listener::new(
            EventKind::Submit,
            Target::ContactForm,
            Handler::SubmitContact,
        ));
        listeners
    }

    /// Store a new raw value and revalidate that field.
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        self.state_mut(field).value = value.into();
        self.validate_field(field)
    }

    /// Clear the field's error, then set it again only if the value is invalid.
    pub fn validate_field(&mut self, field: FieldName) -> bool {
        let state = self.state_mut(field);
        state.validation.clear();
        match validate(field, &state.value) {
            Ok(()) => true,
            Err(error) => {
                state.validation.set(error);
                false
            }
        }
    }

    /// Validate every field and accept the form if all pass.
    ///
    /// Default submission is always suppressed. On success the submission is
    /// logged, the form is reset and every error display is cleared.
    pub fn submit(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];

        // No short-circuit: every field must show its current error.
        let results: Vec<bool> = FieldName::ALL
            .iter()
            .map(|&f| self.validate_field(f))
            .collect();
        if results.contains(&false) {
            tracing::debug!("Contact form rejected");
            return effects;
        }

        let submission = Submission {
            name: js_trim(self.value(FieldName::Name)).to_string(),
            email: js_trim(self.value(FieldName::Email)).to_string(),
            message: js_trim(self.value(FieldName::Message)).to_string(),
        };
        tracing::info!(
            target: "folio::contact",
            name = %submission.name,
            email = %submission.email,
            body = %submission.message,
            "Form data submitted"
        );

        self.reset();
        effects.push(Effect::Submitted(submission));
        effects.push(Effect::Acknowledge(ACKNOWLEDGMENT.to_string()));
        effects
    }

    /// Empty every field and clear its error display.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            state.value.clear();
            state.validation.clear();
        }
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.fields
            .get(&field)
            .map(|s| s.value.as_str())
            .unwrap_or_default()
    }

    pub fn validation(&self, field: FieldName) -> FieldValidation {
        self.fields
            .get(&field)
            .map(|s| s.validation.clone())
            .unwrap_or_default()
    }

    pub fn is_invalid(&self, field: FieldName) -> bool {
        self.fields
            .get(&field)
            .map(|s| s.validation.invalid)
            .unwrap_or(false)
    }

    fn state_mut(&mut self, field: FieldName) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }
}
