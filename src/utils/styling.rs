//! Terminal styling utilities for the post-wizard console output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
    ██╗███╗   ██╗████████╗ █████╗ ██╗  ██╗███████╗
    ██║████╗  ██║╚══██╔══╝██╔══██╗██║ ██╔╝██╔════╝
    ██║██╔██╗ ██║   ██║   ███████║█████╔╝ █████╗
    ██║██║╚██╗██║   ██║   ██╔══██║██╔═██╗ ██╔══╝
    ██║██║ ╚████║   ██║   ██║  ██║██║  ██╗███████╗
    ╚═╝╚═╝  ╚═══╝   ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("✎").magenta().bold(),
        style("Guided signup, four steps at a time").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print where the submitted record landed
pub fn print_saved(path: &Path) {
    println!(
        "    {} Saved to {}",
        SAVE,
        style(path.display()).yellow()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Signup complete!").green().bold()
    );
    println!();
}
