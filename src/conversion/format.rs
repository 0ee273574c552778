//! Format tags accepted by the parser and generator

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Textual representation a conversion reads from or writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    JavaScript,
    TypeScript,
    Csv,
    Yaml,
}

impl Format {
    /// All supported formats, in UI order
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::JavaScript,
        Format::TypeScript,
        Format::Csv,
        Format::Yaml,
    ];

    /// Lower-case tag used on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::JavaScript => "javascript",
            Format::TypeScript => "typescript",
            Format::Csv => "csv",
            Format::Yaml => "yaml",
        }
    }

    /// Human-readable name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::JavaScript => "JavaScript",
            Format::TypeScript => "TypeScript",
            Format::Csv => "CSV",
            Format::Yaml => "YAML",
        }
    }

    /// Guess the format from a file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "js" | "mjs" | "cjs" => Some(Format::JavaScript),
            "ts" => Some(Format::TypeScript),
            "csv" => Some(Format::Csv),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Format {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "javascript" | "js" => Ok(Format::JavaScript),
            "typescript" | "ts" => Ok(Format::TypeScript),
            "csv" => Ok(Format::Csv),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ConversionError::unsupported(s)),
        }
    }
}
