//! CLI module - argument parsing, prompts, and the interactive wizard

mod args;
mod catalog;
mod prompts;
pub mod wizard;

pub use args::{Cli, Commands};
pub use catalog::run_images;
pub use prompts::confirm_overwrite;
