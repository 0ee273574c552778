//! Error types and handling infrastructure for format conversion

use crate::conversion::Format;
use std::fmt;

/// Conversion stage that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Parse => write!(f, "parse"),
            Stage::Generate => write!(f, "generate"),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Please enter some data to convert")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Unsupported format: {tag}")]
    UnsupportedFormat { tag: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },
}

impl ConversionError {
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Self::Parse(ParseError::new(format, message))
    }

    pub fn generate(format: Format, message: impl Into<String>) -> Self {
        Self::Generate(GenerateError::new(format, message))
    }

    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedFormat { tag: tag.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Stage that failed, if the failure came from parsing or generating
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Parse(_) => Some(Stage::Parse),
            Self::Generate(_) => Some(Stage::Generate),
            _ => None,
        }
    }

    /// Format that failed, if any
    pub fn format(&self) -> Option<Format> {
        match self {
            Self::Parse(err) => Some(err.format),
            Self::Generate(err) => Some(err.format),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    ///
    /// This is the single flat string the UI shows in place of the output.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failure while reading text into a value tree
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub format: Format,
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some((line, column));
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} format: {}", self.format, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure while rendering a value tree
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Error converting to {format}: {message}")]
pub struct GenerateError {
    pub format: Format,
    pub message: String,
}

impl GenerateError {
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
        }
    }
}

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for generating operations
pub type GenerateResult<T> = Result<T, GenerateError>;
