//! Configuration options for format conversion

/// CSV delimiter options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelimiterType {
    /// Comma delimiter (,)
    Comma,
    /// Tab delimiter (\\t)
    Tab,
    /// Pipe delimiter (|)
    Pipe,
    /// Semicolon delimiter (;)
    Semicolon,
}

impl DelimiterType {
    pub fn as_byte(&self) -> u8 {
        match self {
            DelimiterType::Comma => b',',
            DelimiterType::Tab => b'\t',
            DelimiterType::Pipe => b'|',
            DelimiterType::Semicolon => b';',
        }
    }
}

/// Nesting limit for the JavaScript literal reader (serde_json uses the same).
/// Much deeper recursion overflows a 2 MB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Spaces per indentation level for JSON and JavaScript output (0-8)
    pub indent_size: u8,
    /// CSV field delimiter
    pub delimiter: DelimiterType,
    /// Name of the root TypeScript interface
    pub type_name: String,
    /// Variable declared by JavaScript output
    pub variable_name: String,
    /// Maximum input size in bytes
    pub memory_limit: usize,
    /// Maximum nesting depth accepted by the JavaScript literal parser
    pub max_depth: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            delimiter: DelimiterType::Comma,
            type_name: "Root".to_string(),
            variable_name: "data".to_string(),
            memory_limit: 100 * 1024 * 1024, // 100MB
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Set CSV delimiter
    pub fn with_delimiter(mut self, delimiter: DelimiterType) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the root TypeScript interface name
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self
    }

    /// Set the JavaScript declaration name
    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = name.into();
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Set maximum nesting depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }

        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }

        if let Some(depth) = self.max_depth {
            if depth == 0 {
                return Err("Max depth must be at least 1".to_string());
            }
        }

        if !is_identifier(&self.type_name) {
            return Err(format!(
                "Type name '{}' is not a valid identifier",
                self.type_name
            ));
        }

        if !is_identifier(&self.variable_name) {
            return Err(format!(
                "Variable name '{}' is not a valid identifier",
                self.variable_name
            ));
        }

        Ok(())
    }
}

/// True for names usable as a JavaScript/TypeScript identifier
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
