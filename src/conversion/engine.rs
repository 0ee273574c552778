//! Core conversion engine: parse the source text, then render the target

use crate::conversion::config::ConversionConfig;
use crate::conversion::{ConversionResult, Format};
use crate::error::ConversionError;
use crate::formatter::generate_with_config;
use crate::parser::parse_with_config;
use serde_json::Value;

/// One conversion request from the UI
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input: String,
    pub source: Format,
    pub target: Format,
}

impl ConversionRequest {
    pub fn new(input: impl Into<String>, source: Format, target: Format) -> Self {
        Self {
            input: input.into(),
            source,
            target,
        }
    }
}

/// Main conversion engine
///
/// Stateless apart from its configuration, so one engine can serve any
/// number of independent requests.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert `input` from `source` format to `target` format
    pub fn convert(&self, input: &str, source: Format, target: Format) -> ConversionResult<String> {
        let value = self.parse(input, source)?;
        self.generate(&value, target)
    }

    /// Convert a request
    pub fn convert_request(&self, request: &ConversionRequest) -> ConversionResult<String> {
        self.convert(&request.input, request.source, request.target)
    }

    /// Parse `input` into a value tree after the shared input checks
    pub fn parse(&self, input: &str, source: Format) -> ConversionResult<Value> {
        self.validate_input(input)?;
        Ok(parse_with_config(input, source, &self.config)?)
    }

    /// Render a value tree
    pub fn generate(&self, value: &Value, target: Format) -> ConversionResult<String> {
        Ok(generate_with_config(value, target, &self.config)?)
    }

    fn validate_input(&self, input: &str) -> ConversionResult<()> {
        if input.trim().is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        if input.len() > self.config.memory_limit {
            return Err(ConversionError::InputTooLarge {
                size: input.len(),
                limit: self.config.memory_limit,
            });
        }

        Ok(())
    }
}

/// Convert a request with the given configuration
pub fn convert_request(
    request: &ConversionRequest,
    config: &ConversionConfig,
) -> ConversionResult<String> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_request(request)
}
