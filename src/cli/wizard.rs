//! Interactive TUI wizard for the four-step signup form
//!
//! Walks the user through Personal Info, Address, Preferences (with a
//! multi-select image gallery), and a final Review & Confirm screen.
//!
//! # Architecture
//!
//! - `WizardState`: owns the `FormStore` plus the active step's view state
//! - `StepView`: enum representing each screen with its embedded draft
//! - `StepAction`: result of handling one key event
//! - `WizardOutcome`: final output type (submitted or quit)
//!
//! Each view keeps a local draft initialized from the store slice when the
//! step is entered, so previously entered values survive back and forward
//! navigation. Drafts are re-validated on every keystroke and the advance
//! transition is only taken while the active step's rules hold. Committing
//! a step dispatches the slice update, marks the step complete, and moves
//! `current_step` forward - in that order.
//!
//! # Key Features
//!
//! - Inline per-field error messages
//! - Progress stepper above the step box
//! - Quit confirmation dialog with overlay
//! - Pending indicator while the submission collaborator runs
//! - Panic-safe terminal cleanup

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::form::gallery::{title_for, toggle_image, CATALOG};
use crate::form::progress::{connector_filled, step_status, StepStatus};
use crate::form::state::{
    AddressInfo, FormAction, FormState, FormStore, PersonalInfo, PersonalInfoPatch, Preferences,
    PreferencesPatch, StepId,
};
use crate::form::submit::{Submission, Submitter};
use crate::form::validation::{
    validate_address, validate_personal, validate_preferences, Field, StepValidation,
};

use super::args::Cli;

// ============================================================================
// Core Result Types
// ============================================================================

/// Result of wizard execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The assembled record was accepted by the submission collaborator
    Submitted,
    /// User quit before submitting
    Quit,
}

// ============================================================================
// Step Views
// ============================================================================

/// Focused section on the preferences screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefFocus {
    Newsletter,
    Notifications,
    Theme,
    Gallery,
}

/// One wizard screen with its embedded draft and UI state
#[derive(Debug, Clone)]
pub enum StepView {
    /// Step 1: name, email, phone text inputs
    Personal { draft: PersonalInfo, focus: usize },

    /// Step 2: address text inputs
    Address { draft: AddressInfo, focus: usize },

    /// Step 3: toggles, theme selector, and the image gallery
    Preferences {
        draft: Preferences,
        focus: PrefFocus,
        cursor: usize,
    },

    /// Step 4: read-only summary plus submit state
    Review {
        submitting: bool,
        error: Option<String>,
    },
}

impl StepView {
    /// Which wizard step this view renders
    pub fn step(&self) -> StepId {
        match self {
            StepView::Personal { .. } => StepId::Personal,
            StepView::Address { .. } => StepId::Address,
            StepView::Preferences { .. } => StepId::Preferences,
            StepView::Review { .. } => StepId::Review,
        }
    }

    /// Build the view for a step, seeding the draft from the stored slice
    pub fn for_step(step: StepId, state: &FormState) -> StepView {
        match step {
            StepId::Personal => StepView::Personal {
                draft: state.personal_info.clone(),
                focus: 0,
            },
            StepId::Address => StepView::Address {
                draft: state.address_info.clone(),
                focus: 0,
            },
            StepId::Preferences => StepView::Preferences {
                draft: state.preferences.clone(),
                focus: PrefFocus::Newsletter,
                cursor: 0,
            },
            StepId::Review => StepView::Review {
                submitting: false,
                error: None,
            },
        }
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// Action to take after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Commit the active draft and move to the next step
    Advance,
    /// Move to the previous step, data preserving
    Retreat,
    /// Stay on the current step
    Stay,
    /// Run the submission collaborator (review step only)
    Submit,
}

// ============================================================================
// Wizard State Machine
// ============================================================================

/// Main wizard state machine: the store plus the active view
pub struct WizardState {
    /// Single source of truth for the collected data
    pub store: FormStore,
    /// UI state of the step currently on screen
    pub view: StepView,
    /// Show quit confirmation dialog
    pub show_quit_confirm: bool,
}

impl WizardState {
    /// Create a wizard positioned at the store's current step
    pub fn new(store: FormStore) -> Self {
        let view = StepView::for_step(store.state().current_step, store.state());
        Self {
            store,
            view,
            show_quit_confirm: false,
        }
    }

    pub fn current_step(&self) -> StepId {
        self.view.step()
    }

    /// Validation of the in-progress draft (continuous re-validation)
    pub fn validation(&self) -> StepValidation {
        match &self.view {
            StepView::Personal { draft, .. } => validate_personal(draft),
            StepView::Address { draft, .. } => validate_address(draft),
            StepView::Preferences { draft, .. } => validate_preferences(draft),
            StepView::Review { .. } => StepValidation::default(),
        }
    }

    /// Commit the active draft and advance: merge-update the slice, mark
    /// the step complete, then move `current_step` forward.
    pub fn advance(&mut self) {
        let step = self.current_step();
        match &self.view {
            StepView::Personal { draft, .. } => self
                .store
                .dispatch(FormAction::UpdatePersonalInfo(draft.clone().into())),
            StepView::Address { draft, .. } => self
                .store
                .dispatch(FormAction::UpdateAddressInfo(draft.clone().into())),
            StepView::Preferences { draft, .. } => self
                .store
                .dispatch(FormAction::UpdatePreferences(draft.clone().into())),
            StepView::Review { .. } => {}
        }
        self.store.dispatch(FormAction::CompleteStep(step));
        if let Some(next) = step.next() {
            self.store.dispatch(FormAction::SetCurrentStep(next));
            self.view = StepView::for_step(next, self.store.state());
        }
    }

    /// Go back one step without touching the stored data
    pub fn retreat(&mut self) {
        if let Some(prev) = self.current_step().prev() {
            self.store.dispatch(FormAction::SetCurrentStep(prev));
            self.view = StepView::for_step(prev, self.store.state());
        }
    }

    /// Handle one key event, applying navigation actions immediately.
    /// A returned [`StepAction::Submit`] is left to the caller, which
    /// owns the submission collaborator.
    pub fn handle_key(&mut self, key: KeyEvent) -> StepAction {
        let action = match self.view.step() {
            StepId::Personal => handle_personal(self, key),
            StepId::Address => handle_address(self, key),
            StepId::Preferences => handle_preferences(self, key),
            StepId::Review => handle_review(key),
        };
        match action {
            StepAction::Advance => self.advance(),
            StepAction::Retreat => self.retreat(),
            StepAction::Stay | StepAction::Submit => {}
        }
        action
    }
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard, pre-populating the store from CLI flags
pub fn run_wizard(cli: &Cli, submitter: &dyn Submitter) -> Result<WizardOutcome> {
    let mut store = FormStore::new();

    if cli.first_name.is_some() || cli.last_name.is_some() || cli.email.is_some() || cli.phone.is_some()
    {
        store.dispatch(FormAction::UpdatePersonalInfo(PersonalInfoPatch {
            first_name: cli.first_name.clone(),
            last_name: cli.last_name.clone(),
            email: cli.email.clone(),
            phone: cli.phone.clone(),
        }));
    }
    if let Some(theme) = cli.theme {
        store.dispatch(FormAction::UpdatePreferences(PreferencesPatch {
            theme: Some(theme),
            ..Default::default()
        }));
    }

    let mut wizard = WizardState::new(store);

    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, &mut wizard, submitter);
    teardown_terminal();

    result
}

// ============================================================================
// Event Loop
// ============================================================================

/// Main wizard event loop
fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    wizard: &mut WizardState,
    submitter: &dyn Submitter,
) -> Result<WizardOutcome> {
    loop {
        terminal.draw(|f| render_wizard(f, wizard))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not release
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Handle quit confirmation overlay first
                if wizard.show_quit_confirm {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            return Ok(WizardOutcome::Quit);
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            wizard.show_quit_confirm = false;
                        }
                        _ => {}
                    }
                    continue;
                }

                // Esc opens the quit confirmation. Plain letters stay
                // available for the text inputs.
                if key.code == KeyCode::Esc {
                    wizard.show_quit_confirm = true;
                    continue;
                }

                if wizard.handle_key(key) == StepAction::Submit {
                    // Draw the pending state before the blocking call
                    if let StepView::Review { submitting, error } = &mut wizard.view {
                        *submitting = true;
                        *error = None;
                    }
                    terminal.draw(|f| render_wizard(f, wizard))?;

                    let submission = Submission::from_state(wizard.store.state());
                    match submitter.submit(&submission) {
                        Ok(()) => {
                            wizard.store.dispatch(FormAction::ResetForm);
                            return Ok(WizardOutcome::Submitted);
                        }
                        Err(e) => {
                            // State is preserved so the user can retry
                            if let StepView::Review { submitting, error } = &mut wizard.view {
                                *submitting = false;
                                *error = Some(e.to_string());
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Event Handlers
// ============================================================================

const PERSONAL_FIELDS: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];
const ADDRESS_FIELDS: [Field; 5] = [
    Field::Street,
    Field::City,
    Field::State,
    Field::ZipCode,
    Field::Country,
];

fn personal_field_mut(draft: &mut PersonalInfo, focus: usize) -> &mut String {
    match focus {
        0 => &mut draft.first_name,
        1 => &mut draft.last_name,
        2 => &mut draft.email,
        _ => &mut draft.phone,
    }
}

fn address_field_mut(draft: &mut AddressInfo, focus: usize) -> &mut String {
    match focus {
        0 => &mut draft.street,
        1 => &mut draft.city,
        2 => &mut draft.state,
        3 => &mut draft.zip_code,
        _ => &mut draft.country,
    }
}

fn handle_personal(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let valid = wizard.validation().is_valid();
    let (draft, focus) = match &mut wizard.view {
        StepView::Personal { draft, focus } => (draft, focus),
        _ => return StepAction::Stay,
    };

    match key.code {
        KeyCode::Char(c) => {
            personal_field_mut(draft, *focus).push(c);
            StepAction::Stay
        }
        KeyCode::Backspace => {
            if personal_field_mut(draft, *focus).pop().is_none() {
                if *focus > 0 {
                    *focus -= 1;
                    StepAction::Stay
                } else {
                    // First step: there is nothing to retreat to
                    StepAction::Retreat
                }
            } else {
                StepAction::Stay
            }
        }
        KeyCode::Up | KeyCode::BackTab => {
            if *focus > 0 {
                *focus -= 1;
            }
            StepAction::Stay
        }
        KeyCode::Down => {
            if *focus < PERSONAL_FIELDS.len() - 1 {
                *focus += 1;
            }
            StepAction::Stay
        }
        KeyCode::Tab => {
            *focus = (*focus + 1) % PERSONAL_FIELDS.len();
            StepAction::Stay
        }
        KeyCode::Enter => {
            if *focus < PERSONAL_FIELDS.len() - 1 {
                *focus += 1;
                StepAction::Stay
            } else if valid {
                StepAction::Advance
            } else {
                StepAction::Stay
            }
        }
        _ => StepAction::Stay,
    }
}

fn handle_address(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let valid = wizard.validation().is_valid();
    let (draft, focus) = match &mut wizard.view {
        StepView::Address { draft, focus } => (draft, focus),
        _ => return StepAction::Stay,
    };

    match key.code {
        KeyCode::Char(c) => {
            address_field_mut(draft, *focus).push(c);
            StepAction::Stay
        }
        KeyCode::Backspace => {
            if address_field_mut(draft, *focus).pop().is_none() {
                if *focus > 0 {
                    *focus -= 1;
                    StepAction::Stay
                } else {
                    StepAction::Retreat
                }
            } else {
                StepAction::Stay
            }
        }
        KeyCode::Up | KeyCode::BackTab => {
            if *focus > 0 {
                *focus -= 1;
            }
            StepAction::Stay
        }
        KeyCode::Down => {
            if *focus < ADDRESS_FIELDS.len() - 1 {
                *focus += 1;
            }
            StepAction::Stay
        }
        KeyCode::Tab => {
            *focus = (*focus + 1) % ADDRESS_FIELDS.len();
            StepAction::Stay
        }
        KeyCode::Enter => {
            if *focus < ADDRESS_FIELDS.len() - 1 {
                *focus += 1;
                StepAction::Stay
            } else if valid {
                StepAction::Advance
            } else {
                StepAction::Stay
            }
        }
        _ => StepAction::Stay,
    }
}

fn handle_preferences(wizard: &mut WizardState, key: KeyEvent) -> StepAction {
    let valid = wizard.validation().is_valid();
    let (draft, focus, cursor) = match &mut wizard.view {
        StepView::Preferences {
            draft,
            focus,
            cursor,
        } => (draft, focus, cursor),
        _ => return StepAction::Stay,
    };

    match key.code {
        KeyCode::Up => {
            match focus {
                PrefFocus::Newsletter => {}
                PrefFocus::Notifications => *focus = PrefFocus::Newsletter,
                PrefFocus::Theme => *focus = PrefFocus::Notifications,
                PrefFocus::Gallery => {
                    if *cursor > 0 {
                        *cursor -= 1;
                    } else {
                        *focus = PrefFocus::Theme;
                    }
                }
            }
            StepAction::Stay
        }
        KeyCode::Down => {
            match focus {
                PrefFocus::Newsletter => *focus = PrefFocus::Notifications,
                PrefFocus::Notifications => *focus = PrefFocus::Theme,
                PrefFocus::Theme => *focus = PrefFocus::Gallery,
                PrefFocus::Gallery => {
                    if *cursor < CATALOG.len() - 1 {
                        *cursor += 1;
                    }
                }
            }
            StepAction::Stay
        }
        KeyCode::Tab => {
            *focus = match focus {
                PrefFocus::Newsletter => PrefFocus::Notifications,
                PrefFocus::Notifications => PrefFocus::Theme,
                PrefFocus::Theme => PrefFocus::Gallery,
                PrefFocus::Gallery => PrefFocus::Newsletter,
            };
            StepAction::Stay
        }
        KeyCode::BackTab => {
            *focus = match focus {
                PrefFocus::Newsletter => PrefFocus::Gallery,
                PrefFocus::Notifications => PrefFocus::Newsletter,
                PrefFocus::Theme => PrefFocus::Notifications,
                PrefFocus::Gallery => PrefFocus::Theme,
            };
            StepAction::Stay
        }
        KeyCode::Left => {
            if *focus == PrefFocus::Theme {
                draft.theme = draft.theme.prev();
            }
            StepAction::Stay
        }
        KeyCode::Right => {
            if *focus == PrefFocus::Theme {
                draft.theme = draft.theme.next();
            }
            StepAction::Stay
        }
        KeyCode::Char(' ') => {
            match focus {
                PrefFocus::Newsletter => draft.newsletter = !draft.newsletter,
                PrefFocus::Notifications => draft.notifications = !draft.notifications,
                PrefFocus::Theme => draft.theme = draft.theme.next(),
                PrefFocus::Gallery => {
                    toggle_image(&mut draft.selected_images, CATALOG[*cursor].url)
                }
            }
            StepAction::Stay
        }
        KeyCode::Enter => {
            if valid {
                StepAction::Advance
            } else {
                StepAction::Stay
            }
        }
        KeyCode::Backspace => StepAction::Retreat,
        _ => StepAction::Stay,
    }
}

fn handle_review(key: KeyEvent) -> StepAction {
    match key.code {
        KeyCode::Enter => StepAction::Submit,
        KeyCode::Backspace | KeyCode::Left => StepAction::Retreat,
        _ => StepAction::Stay,
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Get semantic color for a step
fn step_color(step: StepId) -> Color {
    match step {
        StepId::Personal => Color::Magenta,
        StepId::Address => Color::Yellow,
        StepId::Preferences => Color::Cyan,
        StepId::Review => Color::Green,
    }
}

// ============================================================================
// Main Rendering Functions
// ============================================================================

/// Render the complete wizard UI with persistent shell layout
fn render_wizard(f: &mut Frame, wizard: &WizardState) {
    let area = f.area();

    let logo_height = 8u16;
    let stepper_height = 2u16;
    let hint_height = 1u16;

    let box_width = 72u16;
    let ideal_box_height = 22u16;
    let box_height = ideal_box_height
        .min(area.height.saturating_sub(logo_height + stepper_height + hint_height + 2));

    // Center the whole unit vertically
    let total_height = logo_height + stepper_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    // 1. Logo
    let logo_area = Rect::new(x, y, box_width.min(area.width), logo_height);
    render_logo(f, logo_area);

    // 2. Progress stepper
    let stepper_area = Rect::new(x, y + logo_height, box_width.min(area.width), stepper_height);
    render_stepper(f, stepper_area, wizard.store.state());

    // 3. Step box
    let box_y = y + logo_height + stepper_height;
    let box_area = Rect::new(x, box_y, box_width.min(area.width), box_height.max(10));
    f.render_widget(Clear, box_area);

    let step = wizard.current_step();
    let color = step_color(step);
    let title_text = format!(" Step {}/4 \u{00b7} {} ", step.number(), step.title());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    // 4. Step content
    render_step(f, inner, wizard);

    // 5. Selection count on the bottom border for the gallery
    if let StepView::Preferences { draft, focus, cursor } = &wizard.view {
        let count_text = if *focus == PrefFocus::Gallery {
            format!(
                " {} selected \u{00b7} {}/{} ",
                draft.selected_images.len(),
                cursor + 1,
                CATALOG.len()
            )
        } else {
            format!(" {} selected ", draft.selected_images.len())
        };
        let ct_len = count_text.len() as u16;
        let ct_area = Rect::new(
            (box_area.x + box_area.width).saturating_sub(ct_len + 1),
            (box_area.y + box_area.height).saturating_sub(1),
            ct_len.min(box_area.width),
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(count_text, Style::default().fg(Color::DarkGray))),
            ct_area,
        );
    }

    // 6. Help bar below box
    let hint_y = box_area.y + box_area.height;
    let hint_area = Rect::new(x, hint_y, box_width.min(area.width), 1);
    render_help_bar(f, hint_area, wizard);

    // 7. Quit overlay
    if wizard.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

/// Render logo
fn render_logo(f: &mut Frame, area: Rect) {
    let logo_lines = vec![
        Line::from(Span::styled(
            "██╗███╗   ██╗████████╗ █████╗ ██╗  ██╗███████╗",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║████╗  ██║╚══██╔══╝██╔══██╗██║ ██╔╝██╔════╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║██╔██╗ ██║   ██║   ███████║█████╔╝ █████╗  ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║██║╚██╗██║   ██║   ██╔══██║██╔═██╗ ██╔══╝  ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "██║██║ ╚████║   ██║   ██║  ██║██║  ██╗███████╗",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            "╚═╝╚═╝  ╚═══╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("\u{270e} ", Style::default().fg(Color::Magenta).bold()),
            Span::styled(
                "Guided signup, four steps at a time",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let logo_paragraph = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_paragraph, area);
}

/// Render the progress stepper: one marker per step with connectors that
/// fill in as steps complete
fn render_stepper(f: &mut Frame, area: Rect, state: &FormState) {
    let mut spans: Vec<Span> = Vec::new();

    for (i, step) in StepId::ALL.iter().enumerate() {
        let status = step_status(*step, state.current_step, &state.completed_steps);
        let (marker, style) = match status {
            StepStatus::Completed => (
                "\u{2713}".to_string(),
                Style::default().fg(Color::Green).bold(),
            ),
            StepStatus::Current => (
                step.number().to_string(),
                Style::default().fg(Color::Cyan).bold(),
            ),
            StepStatus::Upcoming => (
                step.number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        let title_style = match status {
            StepStatus::Completed => Style::default().fg(Color::Green),
            StepStatus::Current => Style::default().fg(Color::Cyan).bold(),
            StepStatus::Upcoming => Style::default().fg(Color::DarkGray),
        };

        spans.push(Span::styled(format!("({})", marker), style));
        spans.push(Span::styled(format!(" {}", step.title()), title_style));

        if i < StepId::ALL.len() - 1 {
            let (connector, conn_style) = if connector_filled(*step, &state.completed_steps) {
                (" \u{2501}\u{2501} ", Style::default().fg(Color::Green))
            } else {
                (" \u{2500}\u{2500} ", Style::default().fg(Color::DarkGray))
            };
            spans.push(Span::styled(connector, conn_style));
        }
    }

    let description = Line::from(Span::styled(
        state.current_step.description(),
        Style::default().fg(Color::DarkGray).italic(),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), description]).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render the current step inside the shell box
fn render_step(f: &mut Frame, area: Rect, wizard: &WizardState) {
    match &wizard.view {
        StepView::Personal { .. } => render_personal(f, area, wizard),
        StepView::Address { .. } => render_address(f, area, wizard),
        StepView::Preferences { .. } => render_preferences(f, area, wizard),
        StepView::Review { .. } => render_review(f, area, wizard),
    }
}

/// Render help bar with context-appropriate shortcuts
fn render_help_bar(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let mut spans = vec![];

    match &wizard.view {
        StepView::Personal { .. } | StepView::Address { .. } => {
            spans.push(Span::styled("  Enter", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " next field/continue  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Tab", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " field  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Bksp", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " delete/back  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        StepView::Preferences { .. } => {
            spans.push(Span::styled("  Space", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " toggle  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Tab", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " section  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " continue  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Bksp", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " back  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
        StepView::Review { .. } => {
            spans.push(Span::styled("  Enter", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " submit  ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled("Bksp", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                " back  ",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    spans.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" quit", Style::default().fg(Color::DarkGray)));

    let help_line = Line::from(spans);
    let paragraph = Paragraph::new(help_line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(44, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit Signup? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit without submitting? Entered data",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  will be discarded.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content);
    f.render_widget(paragraph, inner);
}

// ============================================================================
// Step Renderers
// ============================================================================

/// Render a labelled text-input form with inline errors. Errors only show
/// for fields the user has started typing into.
fn render_text_fields(
    f: &mut Frame,
    area: Rect,
    intro: &str,
    rows: &[(Field, &str)],
    focus: usize,
    validation: &StepValidation,
    color: Color,
) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", intro),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, (field, value)) in rows.iter().enumerate() {
        let focused = i == focus;
        let label_style = if focused {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut row = vec![
            Span::styled(format!("  {:<16}", format!("{}:", field.label())), label_style),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ];
        if focused {
            row.push(Span::styled("\u{258c}", Style::default().fg(color)));
        }
        lines.push(Line::from(row));

        if !value.is_empty() {
            if let Some(message) = validation.error(*field) {
                lines.push(Line::from(Span::styled(
                    format!("  {:<16}{}", "", message),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_personal(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (draft, focus) = match &wizard.view {
        StepView::Personal { draft, focus } => (draft, *focus),
        _ => return,
    };
    let validation = validate_personal(draft);
    let rows = [
        (Field::FirstName, draft.first_name.as_str()),
        (Field::LastName, draft.last_name.as_str()),
        (Field::Email, draft.email.as_str()),
        (Field::Phone, draft.phone.as_str()),
    ];
    render_text_fields(
        f,
        area,
        "Let's start with your basic information",
        &rows,
        focus,
        &validation,
        step_color(StepId::Personal),
    );
}

fn render_address(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (draft, focus) = match &wizard.view {
        StepView::Address { draft, focus } => (draft, *focus),
        _ => return,
    };
    let validation = validate_address(draft);
    let rows = [
        (Field::Street, draft.street.as_str()),
        (Field::City, draft.city.as_str()),
        (Field::State, draft.state.as_str()),
        (Field::ZipCode, draft.zip_code.as_str()),
        (Field::Country, draft.country.as_str()),
    ];
    render_text_fields(
        f,
        area,
        "Where can we reach you?",
        &rows,
        focus,
        &validation,
        step_color(StepId::Address),
    );
}

fn render_preferences(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (draft, focus, cursor) = match &wizard.view {
        StepView::Preferences {
            draft,
            focus,
            cursor,
        } => (draft, *focus, *cursor),
        _ => return,
    };
    let color = step_color(StepId::Preferences);
    let validation = validate_preferences(draft);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let section_style = |section: PrefFocus| {
        if focus == section {
            Style::default().fg(color).bold()
        } else {
            Style::default().fg(Color::White)
        }
    };
    let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

    let mut top = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", checkbox(draft.newsletter)),
                section_style(PrefFocus::Newsletter),
            ),
            Span::styled("Newsletter", section_style(PrefFocus::Newsletter)),
            Span::styled(
                "        Subscribe to our newsletter",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {} ", checkbox(draft.notifications)),
                section_style(PrefFocus::Notifications),
            ),
            Span::styled("Notifications", section_style(PrefFocus::Notifications)),
            Span::styled(
                "     Receive notification emails",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("      Theme ", section_style(PrefFocus::Theme)),
            Span::styled("\u{2039} ", Style::default().fg(Color::DarkGray)),
            Span::styled(draft.theme.label(), section_style(PrefFocus::Theme)),
            Span::styled(" \u{203a}", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Choose your favorite images",
            Style::default().fg(Color::DarkGray).bold(),
        )),
    ];
    if let Some(message) = validation.error(Field::SelectedImages) {
        top.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        )));
    } else {
        top.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(top), chunks[0]);

    // Gallery list with scrolling
    let max_visible = chunks[1].height as usize;
    let start_idx = if cursor >= max_visible && max_visible > 0 {
        cursor - max_visible + 1
    } else {
        0
    };

    let items: Vec<ListItem> = CATALOG
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(max_visible.max(1))
        .map(|(i, image)| {
            let is_selected = draft
                .selected_images
                .iter()
                .any(|url| url == image.url);
            let style = if focus == PrefFocus::Gallery && i == cursor {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if is_selected {
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("  {} {}", checkbox(is_selected), image.title)).style(style)
        })
        .collect();

    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(cursor.saturating_sub(start_idx)));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn render_review(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let (submitting, error) = match &wizard.view {
        StepView::Review { submitting, error } => (*submitting, error),
        _ => return,
    };
    let color = step_color(StepId::Review);
    let state = wizard.store.state();
    let personal = &state.personal_info;
    let address = &state.address_info;
    let prefs = &state.preferences;

    let image_titles: Vec<&str> = prefs
        .selected_images
        .iter()
        .map(|url| title_for(url).unwrap_or(url.as_str()))
        .collect();

    let on_off = |v: bool| if v { "on" } else { "off" };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Please review your information before submitting",
            Style::default().fg(Color::DarkGray).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name:           ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {}", personal.first_name, personal.last_name),
                Style::default().fg(color),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Email:          ", Style::default().fg(Color::DarkGray)),
            Span::styled(personal.email.clone(), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("  Phone:          ", Style::default().fg(Color::DarkGray)),
            Span::styled(personal.phone.clone(), Style::default().fg(color)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Address:        ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}, {}, {} {}, {}",
                    address.street, address.city, address.state, address.zip_code, address.country
                ),
                Style::default().fg(color),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Newsletter:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(on_off(prefs.newsletter), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("  Notifications:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(on_off(prefs.notifications), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("  Theme:          ", Style::default().fg(Color::DarkGray)),
            Span::styled(prefs.theme.label(), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("  Images:         ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} selected", prefs.selected_images.len()),
                Style::default().fg(color),
            ),
        ]),
        Line::from(Span::styled(
            format!("                  {}", image_titles.join(", ")),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    if submitting {
        content.push(Line::from(Span::styled(
            "  Submitting your information...",
            Style::default().fg(Color::Yellow).bold(),
        )));
    } else if let Some(message) = error {
        content.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        )));
        content.push(Line::from(Span::styled(
            "  Press Enter to retry",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        content.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" to submit", Style::default().fg(Color::DarkGray)),
        ]));
    }

    f.render_widget(Paragraph::new(content), area);
}
