//! Intake: Guided Signup CLI Tool
//!
//! A command-line tool that collects signup details through a four-step
//! interactive form and writes the submitted record to a JSON file.

use anyhow::Result;
use clap::Parser;

use intake::cli::{confirm_overwrite, run_images, wizard, Cli, Commands};
use intake::form::submit::JsonFileSubmitter;
use intake::utils::styling::{print_banner, print_completion, print_saved, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Images => run_images(),
        };
    }

    let output_path = cli.output_path();

    // Settle the output destination before entering the alternate screen
    if output_path.exists() && !cli.force {
        if !confirm_overwrite(&output_path)? {
            println!("Cancelled by user.");
            return Ok(());
        }
    }

    let submitter = JsonFileSubmitter::new(output_path.clone());

    match wizard::run_wizard(&cli, &submitter)? {
        wizard::WizardOutcome::Submitted => {
            print_banner(env!("CARGO_PKG_VERSION"));
            print_success("Form submitted successfully!");
            print_saved(&output_path);
            print_completion();
        }
        wizard::WizardOutcome::Quit => {
            println!("Cancelled by user.");
        }
    }

    Ok(())
}
