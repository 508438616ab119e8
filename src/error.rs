//! Error types for the E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storefront unreachable after {0} attempts")]
    Unavailable(usize),

    #[error("WebDriver session could not be established: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("Timeout waiting for {0}")]
    Timeout(String),

    #[error("Element not found: {0}")]
    ElementMissing(String),

    #[error("Authentication bootstrap failed: {0}")]
    AuthBootstrap(String),

    #[error("Stale session artifact: {0}")]
    StaleArtifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type SuiteResult<T> = Result<T, SuiteError>;
