//! Shared test utilities and fixture builders

use intake::form::state::{
    AddressInfoPatch, FormAction, FormStore, PersonalInfoPatch, PreferencesPatch, StepId,
};

/// A personal-info patch that passes every step-1 rule
pub fn valid_personal() -> PersonalInfoPatch {
    PersonalInfoPatch {
        first_name: Some("Jo".to_string()),
        last_name: Some("Li".to_string()),
        email: Some("jo@example.com".to_string()),
        phone: Some("1234567890".to_string()),
    }
}

/// An address patch that passes every step-2 rule
pub fn valid_address() -> AddressInfoPatch {
    AddressInfoPatch {
        street: Some("123 Main Street".to_string()),
        city: Some("Springfield".to_string()),
        state: Some("IL".to_string()),
        zip_code: Some("62704".to_string()),
        country: Some("US".to_string()),
    }
}

/// A preferences patch with one selected image, enough to pass step 3
pub fn valid_preferences() -> PreferencesPatch {
    PreferencesPatch {
        newsletter: Some(true),
        notifications: Some(false),
        theme: None,
        selected_images: Some(vec![
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop"
                .to_string(),
        ]),
    }
}

/// Build a store with all four steps filled in and completed, positioned
/// on the review step
pub fn completed_store() -> FormStore {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::UpdateAddressInfo(valid_address()));
    store.dispatch(FormAction::CompleteStep(StepId::Address));
    store.dispatch(FormAction::UpdatePreferences(valid_preferences()));
    store.dispatch(FormAction::CompleteStep(StepId::Preferences));
    store.dispatch(FormAction::SetCurrentStep(StepId::Review));
    store
}
