//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::form::Theme;

/// Intake - collect signup details through a guided four-step form
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output file for the submitted record (JSON).
    /// Defaults to 'submission.json' in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pre-fill the first name field
    #[arg(long)]
    pub first_name: Option<String>,

    /// Pre-fill the last name field
    #[arg(long)]
    pub last_name: Option<String>,

    /// Pre-fill the email field
    #[arg(long)]
    pub email: Option<String>,

    /// Pre-fill the phone field
    #[arg(long)]
    pub phone: Option<String>,

    /// Pre-select the theme preference.
    /// Options: "light", "dark", "auto"
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Overwrite an existing output file without asking
    #[arg(long, default_value = "false")]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the images selectable in the preferences step
    Images,
}

impl Cli {
    /// Get the output path, falling back to 'submission.json' next to
    /// where the tool is run.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("submission.json"))
    }
}
