use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use dataconv::cli::{handle_error, Args, CliConfig, CliUtils};
use dataconv::{ConversionEngine, ConversionError};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConversionError>() {
                Some(conversion_error) => handle_error(conversion_error),
                None => CliUtils::show_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let verbose = config.is_verbose();

    CliUtils::show_verbose("Verbose mode enabled", verbose);
    CliUtils::show_verbose(
        &format!(
            "Converting {} from {} to {}",
            config.input_description(),
            config.source,
            config.target
        ),
        verbose,
    );

    let input = match config.input_path() {
        Some(path) => read_file(path, config.conversion_config.memory_limit)?,
        None => read_stdin()?,
    };
    CliUtils::show_verbose(
        &format!("Read {}", CliUtils::format_file_size(input.len() as u64)),
        verbose,
    );

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let start = Instant::now();
    let output = engine.convert(&input, config.source, config.target)?;
    let elapsed = start.elapsed();
    CliUtils::show_verbose(
        &format!("Converted in {}", CliUtils::format_duration(elapsed)),
        verbose,
    );

    if let Some(output_path) = &config.args.output {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, &output)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        CliUtils::show_success(
            &format!("Converted to: {}", output_path.display()),
            config.is_quiet(),
        );
    } else {
        println!("{}", output);
    }

    if config.want_stats() && !config.is_quiet() {
        eprintln!("Conversion statistics:");
        eprintln!("  Source:      {}", config.source);
        eprintln!("  Target:      {}", config.target);
        eprintln!("  Input size:  {}", CliUtils::format_file_size(input.len() as u64));
        eprintln!("  Output size: {}", CliUtils::format_file_size(output.len() as u64));
        eprintln!("  Output to:   {}", config.output_description());
        eprintln!("  Time:        {}", CliUtils::format_duration(elapsed));
    }

    Ok(())
}

fn read_file(path: &Path, memory_limit: usize) -> Result<String> {
    // Check file size before reading to avoid exhausting memory
    if let Ok(metadata) = std::fs::metadata(path) {
        if metadata.len() > memory_limit as u64 {
            return Err(ConversionError::InputTooLarge {
                size: metadata.len() as usize,
                limit: memory_limit,
            }
            .into());
        }
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;
    Ok(buffer)
}
