//! Unified application error type.
//! File loading, configuration, CLI commands and export all return AppError.
//! The layout engine itself never fails: it yields empty results instead.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No input file given (use --input or set `default_input` in the config)")]
    MissingInput,

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Schedule has {0} data-quality issue(s)")]
    Validation(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid UTC offset: {0} (expected +HH:MM, -HH:MM or Z)")]
    InvalidOffset(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
