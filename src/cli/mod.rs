//! CLI command handlers

pub mod commands;

pub use commands::{init_logging, run, Config, RunSummary, DEFAULT_WORKBOOK};
