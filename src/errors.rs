//! Error types for the glownotes application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while running a note session.

use std::io;

use thiserror::Error;

/// The main error type for the glownotes application.
#[derive(Error, Debug)]
pub enum GlowError {
    /// Errors related to terminal or config file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors surfaced by the HTTP client while talking to the
    /// text-generation service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The text-generation service was invoked but no API key is configured.
    #[error("No API key configured: set GLOW_API_KEY or add api_key to the config file")]
    MissingApiKey,

    /// The text-generation service answered with a non-success status.
    #[error("Text-generation service returned HTTP {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// A shell line could not be split or parsed into a command.
    #[error("{message}")]
    InvalidCommand { message: String },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },
}
