//! Submission contract and the JSON file collaborator.
//!
//! The wizard hands the fully assembled record to a [`Submitter`] and
//! expects success or a human-readable failure; transport, retries, and
//! persistence are entirely the collaborator's concern.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use super::state::{AddressInfo, FormState, PersonalInfo, Preferences};

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The collaborator reported a failure for this record
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("failed to write submission: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The fully assembled record handed to the collaborator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub personal_info: PersonalInfo,
    pub address_info: AddressInfo,
    pub preferences: Preferences,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Assemble a submission from the current form state
    pub fn from_state(state: &FormState) -> Self {
        Self {
            personal_info: state.personal_info.clone(),
            address_info: state.address_info.clone(),
            preferences: state.preferences.clone(),
            submitted_at: Utc::now(),
        }
    }
}

/// External submission collaborator.
pub trait Submitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Default collaborator: writes the record as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileSubmitter {
    path: PathBuf,
}

impl JsonFileSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Submitter for JsonFileSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(submission)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
