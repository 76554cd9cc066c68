//! Tests for the reducer-backed form store
//!
//! Covers default state, patch-merge semantics, step completion, and the
//! reset action.

mod common;

use std::collections::BTreeSet;

use intake::form::state::{
    reduce, FormAction, FormState, FormStore, PersonalInfoPatch, PreferencesPatch, StepId, Theme,
};

use common::{valid_address, valid_personal, valid_preferences};

// ============================================================================
// Default state
// ============================================================================

#[test]
fn test_default_state() {
    let state = FormState::default();

    assert_eq!(state.current_step, StepId::Personal);
    assert!(state.completed_steps.is_empty());

    assert_eq!(state.personal_info.first_name, "");
    assert_eq!(state.personal_info.last_name, "");
    assert_eq!(state.personal_info.email, "");
    assert_eq!(state.personal_info.phone, "");

    assert_eq!(state.address_info.street, "");
    assert_eq!(state.address_info.country, "");

    assert!(!state.preferences.newsletter, "Newsletter defaults to off");
    assert!(
        state.preferences.notifications,
        "Notifications default to on"
    );
    assert_eq!(state.preferences.theme, Theme::Light);
    assert!(state.preferences.selected_images.is_empty());
}

// ============================================================================
// Partial updates merge, never replace
// ============================================================================

#[test]
fn test_update_personal_merges_partial_patch() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));

    // Patch only the email; the other fields must survive
    store.dispatch(FormAction::UpdatePersonalInfo(PersonalInfoPatch {
        email: Some("new@example.com".to_string()),
        ..Default::default()
    }));

    let personal = &store.state().personal_info;
    assert_eq!(personal.first_name, "Jo");
    assert_eq!(personal.last_name, "Li");
    assert_eq!(personal.email, "new@example.com");
    assert_eq!(personal.phone, "1234567890");
}

#[test]
fn test_update_preferences_merges_partial_patch() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePreferences(valid_preferences()));

    store.dispatch(FormAction::UpdatePreferences(PreferencesPatch {
        theme: Some(Theme::Dark),
        ..Default::default()
    }));

    let prefs = &store.state().preferences;
    assert_eq!(prefs.theme, Theme::Dark);
    assert!(prefs.newsletter, "Earlier newsletter toggle preserved");
    assert_eq!(
        prefs.selected_images.len(),
        1,
        "Earlier image selection preserved"
    );
}

#[test]
fn test_updates_leave_other_slices_untouched() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::UpdateAddressInfo(valid_address()));

    assert_eq!(store.state().personal_info.first_name, "Jo");
    assert_eq!(store.state().address_info.city, "Springfield");
}

// ============================================================================
// Step completion
// ============================================================================

#[test]
fn test_complete_step_is_idempotent() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::CompleteStep(StepId::Address));

    let expected: BTreeSet<StepId> = [StepId::Personal, StepId::Address].into_iter().collect();
    assert_eq!(store.state().completed_steps, expected);
}

#[test]
fn test_set_current_step_preserves_data() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::SetCurrentStep(StepId::Preferences));
    store.dispatch(FormAction::SetCurrentStep(StepId::Personal));

    assert_eq!(store.state().current_step, StepId::Personal);
    assert_eq!(
        store.state().personal_info.email,
        "jo@example.com",
        "Navigating away and back must not drop entered data"
    );
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_restores_pristine_state() {
    let mut store = common::completed_store();
    assert_ne!(*store.state(), FormState::default());

    store.dispatch(FormAction::ResetForm);

    assert_eq!(
        *store.state(),
        FormState::default(),
        "Reset must restore every field, the step pointer, and the completed set"
    );
}

// ============================================================================
// Reducer purity
// ============================================================================

#[test]
fn test_reduce_is_a_pure_function_of_its_inputs() {
    let state = FormState::default();
    let a = reduce(
        state.clone(),
        FormAction::SetCurrentStep(StepId::Address),
    );
    let b = reduce(state, FormAction::SetCurrentStep(StepId::Address));
    assert_eq!(a, b);
}

// ============================================================================
// End-to-end first-step scenario
// ============================================================================

#[test]
fn test_step_one_commit_scenario() {
    let mut store = FormStore::new();

    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::SetCurrentStep(StepId::Address));

    let state = store.state();
    assert_eq!(state.current_step, StepId::Address);
    assert!(state.completed_steps.contains(&StepId::Personal));
    assert_eq!(state.personal_info.first_name, "Jo");
}
