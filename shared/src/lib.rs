use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of characters a password must contain
pub const MIN_PASSWORD_LEN: usize = 4;

/// Minimal syntactic email shape: local part, '@', domain, '.', suffix,
/// none of which may contain whitespace or another '@'. Not an RFC 5322 check.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Returns true if the input has the minimal syntactic shape of an email
/// address. Input is lowercased before matching, so the check is
/// case-insensitive. No network or DNS validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(&email.to_lowercase())
}

/// Returns true if the password meets the minimum length. No character-class
/// or strength rules.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Returns true if the terms checkbox is checked.
pub fn is_valid_terms(accepted: bool) -> bool {
    accepted
}

/// The three fields of the registration form. The set is fixed; values and
/// error flags always cover exactly these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Email,
    Password,
    Terms,
}

impl Field {
    /// The `name` attribute the rendered input carries for this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }

    /// Maps a DOM input `name` back to its field. Change events carry the
    /// name as a string; anything outside the fixed set is rejected.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "terms" => Some(Field::Terms),
            _ => None,
        }
    }

    /// Fixed message shown while this field's error flag is set.
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Email => "Enter a valid email address",
            Field::Password => "Password must be at least 4 characters",
            Field::Terms => "You must accept the terms of use",
        }
    }
}

/// Effective value carried by a change event. Checkbox-kind inputs report
/// their checked state, every other kind reports the raw string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Builds the effective value from the raw parts of a DOM change event:
    /// the input's `type` attribute, its string value, and its checked state.
    pub fn from_input(kind: &str, value: String, checked: bool) -> FieldValue {
        if kind == "checkbox" {
            FieldValue::Checked(checked)
        } else {
            FieldValue::Text(value)
        }
    }
}

/// Current values of the three form fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationValues {
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl RegistrationValues {
    /// Conjunction of the three field validators, recomputed on every call.
    /// This is the sole source for submit-button enablement; it never reads
    /// the error flags, which are stale between submits.
    pub fn is_valid(&self) -> bool {
        is_valid_email(&self.email)
            && is_valid_password(&self.password)
            && is_valid_terms(self.terms)
    }
}

/// Per-field error flags. A set flag means "field failed its validator at
/// the last submit and has not been edited since". Flags are display state,
/// not ground truth for validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub email: bool,
    pub password: bool,
    pub terms: bool,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::Terms => self.terms,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = false,
            Field::Password => self.password = false,
            Field::Terms => self.terms = false,
        }
    }
}

/// Inputs accepted by the form's update function. Every state transition is
/// one of these, applied synchronously inside the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldEdited { field: Field, value: FieldValue },
    SubmitRequested,
}

/// Whole form state: current values plus current error flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub values: RegistrationValues,
    pub errors: FieldErrors,
}

impl RegistrationForm {
    /// Applies one event and returns the next state, plus the accepted
    /// values when a submit passed validation (to be handed to the
    /// submission sink exactly once).
    ///
    /// Editing a field stores its effective value and unconditionally clears
    /// that field's error flag, without re-running the validator; the flag
    /// comes back only if the next submit fails. No other field is touched.
    ///
    /// Submitting runs all three validators in one pass and replaces the
    /// error flags wholesale. Values are never cleared or rewritten.
    pub fn update(mut self, event: FormEvent) -> (RegistrationForm, Option<RegistrationValues>) {
        match event {
            FormEvent::FieldEdited { field, value } => {
                match (field, value) {
                    (Field::Email, FieldValue::Text(text)) => self.values.email = text,
                    (Field::Password, FieldValue::Text(text)) => self.values.password = text,
                    (Field::Terms, FieldValue::Checked(checked)) => self.values.terms = checked,
                    // A kind/field mismatch carries no usable value
                    _ => {}
                }
                self.errors.clear(field);
                (self, None)
            }
            FormEvent::SubmitRequested => {
                self.errors = FieldErrors {
                    email: !is_valid_email(&self.values.email),
                    password: !is_valid_password(&self.values.password),
                    terms: !is_valid_terms(self.values.terms),
                };
                let accepted = if self.errors == FieldErrors::default() {
                    Some(self.values.clone())
                } else {
                    None
                };
                (self, accepted)
            }
        }
    }
}
