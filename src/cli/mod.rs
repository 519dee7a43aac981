//! CLI command handlers

pub mod commands;

pub use commands::{build_report, generate, Report, DEFAULT_INPUT};
