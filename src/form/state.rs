//! Wizard state store - a reducer over the signup form record.
//!
//! All mutation goes through [`FormAction`] and the pure [`reduce`]
//! function, so every transition is total and atomic over the in-memory
//! record. The store is an explicitly constructed holder passed to
//! whoever needs it; there is no global state.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Step Identifiers
// ============================================================================

/// One of the four sequential wizard steps.
///
/// The `{1..4}` domain from the form design holds by construction: there
/// is no way to represent an out-of-range step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepId {
    Personal,
    Address,
    Preferences,
    Review,
}

impl StepId {
    /// All steps in wizard order
    pub const ALL: [StepId; 4] = [
        StepId::Personal,
        StepId::Address,
        StepId::Preferences,
        StepId::Review,
    ];

    /// 1-based step number as shown in the progress stepper
    pub fn number(self) -> u8 {
        match self {
            StepId::Personal => 1,
            StepId::Address => 2,
            StepId::Preferences => 3,
            StepId::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<StepId> {
        match n {
            1 => Some(StepId::Personal),
            2 => Some(StepId::Address),
            3 => Some(StepId::Preferences),
            4 => Some(StepId::Review),
            _ => None,
        }
    }

    /// Display title for this step
    pub fn title(self) -> &'static str {
        match self {
            StepId::Personal => "Personal Info",
            StepId::Address => "Address",
            StepId::Preferences => "Preferences",
            StepId::Review => "Review",
        }
    }

    /// Short description shown under the stepper title
    pub fn description(self) -> &'static str {
        match self {
            StepId::Personal => "Basic information",
            StepId::Address => "Location details",
            StepId::Preferences => "Your choices",
            StepId::Review => "Confirm details",
        }
    }

    /// The step after this one, if any
    pub fn next(self) -> Option<StepId> {
        Self::from_number(self.number() + 1)
    }

    /// The step before this one, if any
    pub fn prev(self) -> Option<StepId> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Color theme preference collected on step 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Cycle forward through the theme options (wraps around)
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
            Theme::Auto => Theme::Light,
        }
    }

    /// Cycle backward through the theme options (wraps around)
    pub fn prev(self) -> Theme {
        match self {
            Theme::Light => Theme::Auto,
            Theme::Dark => Theme::Light,
            Theme::Auto => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "auto" => Ok(Theme::Auto),
            other => Err(format!(
                "unknown theme '{}'. Options: light, dark, auto",
                other
            )),
        }
    }
}

// ============================================================================
// Slice Records
// ============================================================================

/// Step 1 slice. Empty strings mean "not yet entered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Step 2 slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Step 3 slice. `selected_images` preserves selection order and never
/// contains duplicates (see `form::gallery::toggle_image`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub newsletter: bool,
    pub notifications: bool,
    pub theme: Theme,
    pub selected_images: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            newsletter: false,
            notifications: true,
            theme: Theme::Light,
            selected_images: Vec::new(),
        }
    }
}

// ============================================================================
// Patches (shallow merges)
// ============================================================================

/// Partial update for the personal slice: `Some` fields overwrite,
/// `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl PersonalInfo {
    /// Shallow-merge a patch into this record
    pub fn merged(mut self, patch: PersonalInfoPatch) -> Self {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        self
    }
}

impl From<PersonalInfo> for PersonalInfoPatch {
    fn from(record: PersonalInfo) -> Self {
        Self {
            first_name: Some(record.first_name),
            last_name: Some(record.last_name),
            email: Some(record.email),
            phone: Some(record.phone),
        }
    }
}

/// Partial update for the address slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressInfoPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

impl AddressInfo {
    /// Shallow-merge a patch into this record
    pub fn merged(mut self, patch: AddressInfoPatch) -> Self {
        if let Some(v) = patch.street {
            self.street = v;
        }
        if let Some(v) = patch.city {
            self.city = v;
        }
        if let Some(v) = patch.state {
            self.state = v;
        }
        if let Some(v) = patch.zip_code {
            self.zip_code = v;
        }
        if let Some(v) = patch.country {
            self.country = v;
        }
        self
    }
}

impl From<AddressInfo> for AddressInfoPatch {
    fn from(record: AddressInfo) -> Self {
        Self {
            street: Some(record.street),
            city: Some(record.city),
            state: Some(record.state),
            zip_code: Some(record.zip_code),
            country: Some(record.country),
        }
    }
}

/// Partial update for the preferences slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub newsletter: Option<bool>,
    pub notifications: Option<bool>,
    pub theme: Option<Theme>,
    pub selected_images: Option<Vec<String>>,
}

impl Preferences {
    /// Shallow-merge a patch into this record
    pub fn merged(mut self, patch: PreferencesPatch) -> Self {
        if let Some(v) = patch.newsletter {
            self.newsletter = v;
        }
        if let Some(v) = patch.notifications {
            self.notifications = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
        if let Some(v) = patch.selected_images {
            self.selected_images = v;
        }
        self
    }
}

impl From<Preferences> for PreferencesPatch {
    fn from(record: Preferences) -> Self {
        Self {
            newsletter: Some(record.newsletter),
            notifications: Some(record.notifications),
            theme: Some(record.theme),
            selected_images: Some(record.selected_images),
        }
    }
}

// ============================================================================
// Form State and Actions
// ============================================================================

/// The single source of truth for the wizard: current step, completed
/// steps, and the three data slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub current_step: StepId,
    pub completed_steps: BTreeSet<StepId>,
    pub personal_info: PersonalInfo,
    pub address_info: AddressInfo,
    pub preferences: Preferences,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            current_step: StepId::Personal,
            completed_steps: BTreeSet::new(),
            personal_info: PersonalInfo::default(),
            address_info: AddressInfo::default(),
            preferences: Preferences::default(),
        }
    }
}

/// The closed action vocabulary of the store. Every action is a total
/// function over its input domain; none can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    UpdatePersonalInfo(PersonalInfoPatch),
    UpdateAddressInfo(AddressInfoPatch),
    UpdatePreferences(PreferencesPatch),
    /// Unconditional navigation; callers are responsible for validating
    SetCurrentStep(StepId),
    /// Idempotent: set semantics, insertion order irrelevant
    CompleteStep(StepId),
    /// Back to the documented initial defaults
    ResetForm,
}

/// Pure reducer: `(state, action) -> new state`, no hidden side effects.
pub fn reduce(state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::UpdatePersonalInfo(patch) => FormState {
            personal_info: state.personal_info.merged(patch),
            ..state
        },
        FormAction::UpdateAddressInfo(patch) => FormState {
            address_info: state.address_info.merged(patch),
            ..state
        },
        FormAction::UpdatePreferences(patch) => FormState {
            preferences: state.preferences.merged(patch),
            ..state
        },
        FormAction::SetCurrentStep(step) => FormState {
            current_step: step,
            ..state
        },
        FormAction::CompleteStep(step) => {
            let mut completed_steps = state.completed_steps;
            completed_steps.insert(step);
            FormState {
                completed_steps,
                ..state
            }
        }
        FormAction::ResetForm => FormState::default(),
    }
}

// ============================================================================
// Store
// ============================================================================

/// Explicitly constructed state holder wrapping [`FormState`].
///
/// Exactly one logical owner dispatches at a time, sequentially, in
/// response to user input; the reducer itself stays pure.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    /// Create a store holding the initial defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: FormAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }
}
