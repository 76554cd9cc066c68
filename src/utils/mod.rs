//! Shared utilities - terminal styling helpers

pub mod styling;
