//! Format conversion module
//!
//! This module contains the conversion engine, format tags, and configuration.

pub mod config;
pub mod engine;
pub mod format;
pub mod simple;

pub use config::{ConversionConfig, DelimiterType, DEFAULT_MAX_DEPTH};
pub use engine::{convert_request, ConversionEngine, ConversionRequest};
pub use format::Format;
pub use simple::convert_json_js;

use crate::error::ConversionError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
