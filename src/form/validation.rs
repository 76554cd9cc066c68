//! Per-step validation rules.
//!
//! Rules are pure predicates over the form record. The wizard re-runs
//! them on every keystroke and only enables the advance transition while
//! the active step's rules all hold. There is no cross-field or
//! cross-step validation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::state::{AddressInfo, FormState, PersonalInfo, Preferences, StepId};

/// A validated field, across all steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Street,
    City,
    State,
    ZipCode,
    Country,
    SelectedImages,
}

impl Field {
    /// Display label used next to input controls
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Street => "Street Address",
            Field::City => "City",
            Field::State => "State",
            Field::ZipCode => "ZIP Code",
            Field::Country => "Country",
            Field::SelectedImages => "Images",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of validating one step: a field -> message map, empty when
/// every rule holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepValidation {
    pub field_errors: BTreeMap<Field, String>,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// The inline error for one field, if any
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    fn require_min(&mut self, field: Field, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.field_errors.insert(field, message.to_string());
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose email syntax check: local part, @, domain with a dot.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Step 1 rules: name lengths, email syntax, phone length.
pub fn validate_personal(info: &PersonalInfo) -> StepValidation {
    let mut validation = StepValidation::default();
    validation.require_min(
        Field::FirstName,
        &info.first_name,
        2,
        "First name must be at least 2 characters",
    );
    validation.require_min(
        Field::LastName,
        &info.last_name,
        2,
        "Last name must be at least 2 characters",
    );
    if !is_valid_email(&info.email) {
        validation.field_errors.insert(
            Field::Email,
            "Please enter a valid email address".to_string(),
        );
    }
    validation.require_min(
        Field::Phone,
        &info.phone,
        10,
        "Phone number must be at least 10 digits",
    );
    validation
}

/// Step 2 rules: minimum lengths for every address field.
pub fn validate_address(info: &AddressInfo) -> StepValidation {
    let mut validation = StepValidation::default();
    validation.require_min(
        Field::Street,
        &info.street,
        5,
        "Street address must be at least 5 characters",
    );
    validation.require_min(Field::City, &info.city, 2, "City must be at least 2 characters");
    validation.require_min(
        Field::State,
        &info.state,
        2,
        "State must be at least 2 characters",
    );
    validation.require_min(
        Field::ZipCode,
        &info.zip_code,
        5,
        "ZIP code must be at least 5 characters",
    );
    validation.require_min(
        Field::Country,
        &info.country,
        2,
        "Country must be at least 2 characters",
    );
    validation
}

/// Step 3 rules: at least one image selected. The booleans and theme
/// enum are unconstrained.
pub fn validate_preferences(prefs: &Preferences) -> StepValidation {
    let mut validation = StepValidation::default();
    if prefs.selected_images.is_empty() {
        validation.field_errors.insert(
            Field::SelectedImages,
            "Please select at least one image".to_string(),
        );
    }
    validation
}

/// Validate one step's slice of the stored form state. The review step
/// has no field rules of its own.
pub fn validate_step(step: StepId, state: &FormState) -> StepValidation {
    match step {
        StepId::Personal => validate_personal(&state.personal_info),
        StepId::Address => validate_address(&state.address_info),
        StepId::Preferences => validate_preferences(&state.preferences),
        StepId::Review => StepValidation::default(),
    }
}
