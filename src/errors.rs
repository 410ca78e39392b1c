//! Unified application error type.
//! All modules (query, render, cli, config, utils) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Query client
    // ---------------------------
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Query endpoint returned HTTP status {0}")]
    EndpointStatus(u16),

    #[error("Malformed query response: {0}")]
    ResponseDecode(#[from] serde_json::Error),

    #[error("Malformed query response: {0}")]
    MalformedResponse(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Render errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
