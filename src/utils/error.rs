// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 500 Internal Server Error, 403 Forbidden

    #[error("Listing page not found: {0}")]
    PageNotFound(String),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Entry is missing its {0} element")]
    MissingField(&'static str),

    #[error("Malformed metadata line: expected 3 pipe-delimited segments, found {0}")]
    MalformedMetadata(usize),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Fetching listing failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
