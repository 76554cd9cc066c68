//! Unit tests for the TUI wizard state machine
//!
//! These tests verify the wizard's pure logic components:
//! - Step sequencing and navigation
//! - Per-keystroke draft editing and validation gating
//! - Data preservation across back navigation
//!
//! DO NOT test TUI rendering or terminal operations here - those require
//! integration tests with mocked terminal interfaces.

mod common;

use crossterm::event::{KeyCode, KeyEvent};

use intake::cli::wizard::{PrefFocus, StepAction, StepView, WizardState};
use intake::form::gallery::CATALOG;
use intake::form::state::{FormAction, FormStore, StepId};

use common::{valid_address, valid_personal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

/// Type a string into the focused text field
fn type_text(wizard: &mut WizardState, text: &str) {
    for c in text.chars() {
        wizard.handle_key(key(KeyCode::Char(c)));
    }
}

/// Press Enter once
fn press_enter(wizard: &mut WizardState) -> StepAction {
    wizard.handle_key(key(KeyCode::Enter))
}

/// Fill the personal step with valid values, leaving focus on the last
/// field
fn fill_personal(wizard: &mut WizardState) {
    type_text(wizard, "Jo");
    press_enter(wizard);
    type_text(wizard, "Li");
    press_enter(wizard);
    type_text(wizard, "jo@example.com");
    press_enter(wizard);
    type_text(wizard, "1234567890");
}

// ============================================================================
// Step sequencing
// ============================================================================

#[test]
fn test_wizard_starts_on_personal_step() {
    let wizard = WizardState::new(FormStore::new());
    assert_eq!(wizard.current_step(), StepId::Personal);
    assert!(matches!(wizard.view, StepView::Personal { .. }));
}

#[test]
fn test_enter_through_valid_personal_step_advances() {
    let mut wizard = WizardState::new(FormStore::new());
    fill_personal(&mut wizard);

    let action = press_enter(&mut wizard);
    assert_eq!(action, StepAction::Advance);
    assert_eq!(wizard.current_step(), StepId::Address);

    // The commit wrote the draft into the store and marked step 1 done
    let state = wizard.store.state();
    assert_eq!(state.personal_info.email, "jo@example.com");
    assert!(state.completed_steps.contains(&StepId::Personal));
}

#[test]
fn test_invalid_step_does_not_advance() {
    let mut wizard = WizardState::new(FormStore::new());

    // Only a first name, everything else empty
    type_text(&mut wizard, "Jo");
    for _ in 0..3 {
        press_enter(&mut wizard);
    }

    let action = press_enter(&mut wizard);
    assert_eq!(action, StepAction::Stay, "Invalid draft must not advance");
    assert_eq!(wizard.current_step(), StepId::Personal);
    assert!(
        wizard.store.state().completed_steps.is_empty(),
        "Nothing may be committed on a failed advance"
    );
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_edits_the_focused_field() {
    let mut wizard = WizardState::new(FormStore::new());
    type_text(&mut wizard, "Jo");

    match &wizard.view {
        StepView::Personal { draft, focus } => {
            assert_eq!(draft.first_name, "Jo");
            assert_eq!(*focus, 0);
        }
        other => panic!("Expected personal view, got {:?}", other),
    }
}

#[test]
fn test_backspace_deletes_then_moves_focus_back() {
    let mut wizard = WizardState::new(FormStore::new());
    type_text(&mut wizard, "J");
    press_enter(&mut wizard); // focus to last name

    // Empty field: first backspace returns focus to first name
    wizard.handle_key(key(KeyCode::Backspace));
    match &wizard.view {
        StepView::Personal { draft, focus } => {
            assert_eq!(*focus, 0);
            assert_eq!(draft.first_name, "J");
        }
        other => panic!("Expected personal view, got {:?}", other),
    }

    // Non-empty field: backspace deletes a character
    wizard.handle_key(key(KeyCode::Backspace));
    match &wizard.view {
        StepView::Personal { draft, .. } => assert_eq!(draft.first_name, ""),
        other => panic!("Expected personal view, got {:?}", other),
    }
}

#[test]
fn test_tab_wraps_focus() {
    let mut wizard = WizardState::new(FormStore::new());
    for _ in 0..4 {
        wizard.handle_key(key(KeyCode::Tab));
    }
    match &wizard.view {
        StepView::Personal { focus, .. } => assert_eq!(*focus, 0, "Tab wraps after last field"),
        other => panic!("Expected personal view, got {:?}", other),
    }
}

// ============================================================================
// Back navigation preserves data
// ============================================================================

#[test]
fn test_retreat_preserves_committed_data() {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::SetCurrentStep(StepId::Address));
    let mut wizard = WizardState::new(store);

    // Backspace on the empty first address field goes back a step
    let action = wizard.handle_key(key(KeyCode::Backspace));
    assert_eq!(action, StepAction::Retreat);
    assert_eq!(wizard.current_step(), StepId::Personal);

    // The personal draft is re-seeded from the store
    match &wizard.view {
        StepView::Personal { draft, .. } => {
            assert_eq!(draft.first_name, "Jo");
            assert_eq!(draft.email, "jo@example.com");
        }
        other => panic!("Expected personal view, got {:?}", other),
    }

    // Step 1 keeps its completed marker while revisited
    assert!(wizard
        .store
        .state()
        .completed_steps
        .contains(&StepId::Personal));
}

#[test]
fn test_retreat_on_first_step_is_a_no_op() {
    let mut wizard = WizardState::new(FormStore::new());
    wizard.handle_key(key(KeyCode::Backspace));
    assert_eq!(wizard.current_step(), StepId::Personal);
}

// ============================================================================
// Preferences step
// ============================================================================

fn wizard_on_preferences() -> WizardState {
    let mut store = FormStore::new();
    store.dispatch(FormAction::UpdatePersonalInfo(valid_personal()));
    store.dispatch(FormAction::CompleteStep(StepId::Personal));
    store.dispatch(FormAction::UpdateAddressInfo(valid_address()));
    store.dispatch(FormAction::CompleteStep(StepId::Address));
    store.dispatch(FormAction::SetCurrentStep(StepId::Preferences));
    WizardState::new(store)
}

#[test]
fn test_space_toggles_newsletter() {
    let mut wizard = wizard_on_preferences();

    wizard.handle_key(key(KeyCode::Char(' ')));
    match &wizard.view {
        StepView::Preferences { draft, .. } => assert!(draft.newsletter),
        other => panic!("Expected preferences view, got {:?}", other),
    }

    wizard.handle_key(key(KeyCode::Char(' ')));
    match &wizard.view {
        StepView::Preferences { draft, .. } => assert!(!draft.newsletter),
        other => panic!("Expected preferences view, got {:?}", other),
    }
}

#[test]
fn test_gallery_selection_gates_advance() {
    let mut wizard = wizard_on_preferences();

    // No image selected yet: Enter stays put
    assert_eq!(press_enter(&mut wizard), StepAction::Stay);
    assert_eq!(wizard.current_step(), StepId::Preferences);

    // Tab to the gallery and select the image under the cursor
    for _ in 0..3 {
        wizard.handle_key(key(KeyCode::Tab));
    }
    match &wizard.view {
        StepView::Preferences { focus, .. } => assert_eq!(*focus, PrefFocus::Gallery),
        other => panic!("Expected preferences view, got {:?}", other),
    }
    wizard.handle_key(key(KeyCode::Char(' ')));

    let action = press_enter(&mut wizard);
    assert_eq!(action, StepAction::Advance);
    assert_eq!(wizard.current_step(), StepId::Review);
    assert_eq!(
        wizard.store.state().preferences.selected_images,
        vec![CATALOG[0].url.to_string()]
    );
}

#[test]
fn test_gallery_cursor_movement_and_toggle_off() {
    let mut wizard = wizard_on_preferences();
    for _ in 0..3 {
        wizard.handle_key(key(KeyCode::Tab));
    }

    wizard.handle_key(key(KeyCode::Down));
    wizard.handle_key(key(KeyCode::Char(' ')));
    wizard.handle_key(key(KeyCode::Char(' ')));

    match &wizard.view {
        StepView::Preferences { draft, cursor, .. } => {
            assert_eq!(*cursor, 1);
            assert!(
                draft.selected_images.is_empty(),
                "Double toggle leaves the selection empty"
            );
        }
        other => panic!("Expected preferences view, got {:?}", other),
    }
}

// ============================================================================
// Review step
// ============================================================================

#[test]
fn test_review_enter_requests_submission() {
    let mut wizard = WizardState::new(common::completed_store());
    assert_eq!(wizard.current_step(), StepId::Review);

    let action = press_enter(&mut wizard);
    assert_eq!(action, StepAction::Submit);
}

#[test]
fn test_review_backspace_retreats_without_losing_data() {
    let mut wizard = WizardState::new(common::completed_store());

    let action = wizard.handle_key(key(KeyCode::Backspace));
    assert_eq!(action, StepAction::Retreat);
    assert_eq!(wizard.current_step(), StepId::Preferences);
    assert_eq!(wizard.store.state().preferences.selected_images.len(), 1);
}
