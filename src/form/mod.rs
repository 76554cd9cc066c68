//! Form core - the state store, validation rules, progress projection,
//! image gallery, and the submission contract.

pub mod gallery;
pub mod progress;
pub mod state;
pub mod submit;
pub mod validation;

pub use state::{
    AddressInfo, AddressInfoPatch, FormAction, FormState, FormStore, PersonalInfo,
    PersonalInfoPatch, Preferences, PreferencesPatch, StepId, Theme,
};
