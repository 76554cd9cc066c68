//! Intake: Guided Signup Form Library
//!
//! A library for collecting signup information through a four-step
//! terminal wizard: personal info, address, preferences, and review.

pub mod cli;
pub mod form;
pub mod utils;
