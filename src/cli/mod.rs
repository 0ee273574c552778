//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conversion::{ConversionConfig, ConversionResult, DelimiterType, Format};
use crate::error::ConversionError;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "dataconv")]
#[command(about = "Convert structured data between JSON, JavaScript, TypeScript, CSV and YAML")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input file (default: standard input)
    #[arg()]
    pub input: Option<PathBuf>,

    /// Source format (default: guessed from the input file extension)
    #[arg(short, long, value_enum)]
    pub from: Option<FormatArg>,

    /// Target format
    #[arg(short, long, value_enum)]
    pub to: FormatArg,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Spaces per indentation level for JSON/JavaScript output (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// CSV delimiter: comma, tab, pipe, or semicolon (default: comma)
    #[arg(long, value_enum)]
    pub delimiter: Option<Delimiter>,

    /// Root interface name for TypeScript output (default: Root)
    #[arg(long)]
    pub type_name: Option<String>,

    /// Variable name for JavaScript output (default: data)
    #[arg(long)]
    pub variable_name: Option<String>,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Format names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum FormatArg {
    Json,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    Csv,
    #[value(name = "yaml", alias = "yml")]
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::JavaScript => Format::JavaScript,
            FormatArg::TypeScript => Format::TypeScript,
            FormatArg::Csv => Format::Csv,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

/// Delimiter types for CLI
#[derive(ValueEnum, Debug, Clone)]
pub enum Delimiter {
    #[value(name = "comma", alias = ",")]
    Comma,
    #[value(name = "tab")]
    Tab,
    #[value(name = "pipe", alias = "|")]
    Pipe,
    #[value(name = "semicolon", alias = ";")]
    Semicolon,
}

impl From<Delimiter> for DelimiterType {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Comma => DelimiterType::Comma,
            Delimiter::Tab => DelimiterType::Tab,
            Delimiter::Pipe => DelimiterType::Pipe,
            Delimiter::Semicolon => DelimiterType::Semicolon,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub source: Format,
    pub target: Format,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;
        let source = Self::resolve_source(&args)?;
        let target = args.to.into();

        Ok(Self {
            args,
            source,
            target,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let defaults = ConversionConfig::default();
        let config = ConversionConfig {
            indent_size: args.indent.unwrap_or(defaults.indent_size),
            delimiter: args
                .delimiter
                .clone()
                .map(Into::into)
                .unwrap_or(defaults.delimiter),
            type_name: args.type_name.clone().unwrap_or(defaults.type_name),
            variable_name: args.variable_name.clone().unwrap_or(defaults.variable_name),
            memory_limit: parse_memory_limit(&args.memory_limit)?,
            max_depth: defaults.max_depth,
        };

        // Validate configuration
        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    fn resolve_source(args: &Args) -> ConversionResult<Format> {
        if let Some(from) = args.from {
            return Ok(from.into());
        }
        match args.input.as_deref().filter(|_| !args.stdin) {
            Some(path) => Format::from_extension(path).ok_or_else(|| {
                ConversionError::configuration(format!(
                    "Cannot determine the format of '{}'; use --from",
                    path.display()
                ))
            }),
            None => Err(ConversionError::configuration(
                "Reading standard input requires --from",
            )),
        }
    }

    /// Input file, unless standard input was requested
    pub fn input_path(&self) -> Option<&Path> {
        if self.args.stdin {
            None
        } else {
            self.args.input.as_deref()
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        match self.input_path() {
            Some(path) => format!("'{}'", path.display()),
            None => "standard input".to_string(),
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
pub fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let limit_str = match limit {
        None => return Ok(ConversionConfig::default().memory_limit),
        Some(limit_str) => limit_str.trim().to_uppercase(),
    };

    let invalid = || ConversionError::configuration(format!("Invalid memory limit: {}", limit_str));

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        (size, 1.0)
    } else {
        // Assume bytes
        (limit_str.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a diagnostic line (only in verbose mode)
    pub fn show_verbose(message: &str, verbose: bool) {
        if verbose {
            eprintln!("· {}", message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    CliUtils::show_error(&error.user_message());

    // Provide helpful suggestions
    match error {
        ConversionError::Parse(err) if err.format == Format::TypeScript => {
            eprintln!("\nTip: only flat interfaces with string, number, boolean and any fields can be read");
        }
        ConversionError::Generate(err) if err.format == Format::Csv => {
            eprintln!("\nTip: CSV output needs an array of objects");
        }
        ConversionError::InputTooLarge { .. } => {
            eprintln!("\nTip: Use --memory-limit to increase the input size allowance");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'dataconv --help' for usage information.");
}
