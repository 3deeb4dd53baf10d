//! synccp - Durable Copy
//!
//! Copies one file's contents and permission mode to another path and
//! syncs the destination to disk, powered by synccopy.

use clap::{Parser, ValueEnum};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use synccopy::{
    CopyOptions, CopyStats, DEFAULT_BUFFER_SIZE, Error as SynccopyError, copy_file,
    is_no_space_error,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// synccp - Durable file copy
///
/// Copy SOURCE to DEST, carrying over the permission mode, and only report
/// success once DEST has been flushed to stable storage.
///
/// Usage:
///   synccp                 (copies source.txt to destination.txt)
///   synccp SOURCE DEST
#[derive(Parser, Debug)]
#[command(name = "synccp", version, about, long_about = None)]
struct Args {
    /// Source file
    #[arg(default_value = "source.txt")]
    source: PathBuf,

    /// Destination file (created or overwritten)
    #[arg(default_value = "destination.txt")]
    dest: PathBuf,

    /// Size of the copy buffer in bytes
    #[arg(short = 'b', long, value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    output: OutputMode,

    /// Do not print a summary on success
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Log each copy step to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Copy(#[from] SynccopyError),

    #[error("Failed to serialize JSON output: {source}")]
    JsonSerialize { source: serde_json::Error },
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            Self::Copy(source) => source.code().as_str(),
            Self::JsonSerialize { .. } => "internal",
        }
    }

    /// Whether the copy failed because the destination device is full.
    fn is_no_space(&self) -> bool {
        match self {
            Self::Copy(source) => is_no_space_error(source.io_error()),
            Self::JsonSerialize { .. } => false,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Any failure is fatal; there is nothing to recover.
    if let Err(error) = run(&args) {
        if args.output == OutputMode::Json {
            let record = failure_record(&args, &error);
            if let Ok(serialized) = serde_json::to_string(&record) {
                println!("{serialized}");
            }
        }
        eprintln!("error[{}]: {}", error.code(), error);
        if error.is_no_space() {
            eprintln!(
                "hint: no space left on the destination device; {} may hold partial data. \
                 Free space and re-run.",
                args.dest.display()
            );
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> CliResult<()> {
    let options = CopyOptions::default().with_buffer_size(args.buffer_size);

    tracing::debug!(
        source = %args.source.display(),
        dest = %args.dest.display(),
        buffer_size = options.buffer_size,
        "starting copy"
    );

    let stats = copy_file(&args.source, &args.dest, &options)?;

    match args.output {
        OutputMode::Human => {
            if !args.quiet {
                print_stats(&args.source, &args.dest, &stats);
            }
            Ok(())
        }
        OutputMode::Json => print_json_value(&success_record(&args.source, &args.dest, &stats)),
    }
}

fn success_record(source: &Path, dest: &Path, stats: &CopyStats) -> Value {
    let mut record = json!({
        "schema_version": "1.0",
        "source": display_path(source),
        "destination": display_path(dest),
        "outcome": "copied",
        "bytes_copied": stats.bytes_copied,
        "duration_ms": u64::try_from(stats.duration.as_millis()).unwrap_or(u64::MAX),
    });

    #[cfg(unix)]
    if let Some(obj) = record.as_object_mut() {
        obj.insert("mode".to_owned(), Value::String(format_mode(stats.mode())));
    }

    record
}

fn failure_record(args: &Args, error: &CliError) -> Value {
    json!({
        "schema_version": "1.0",
        "source": display_path(&args.source),
        "destination": display_path(&args.dest),
        "outcome": "failed",
        "error_code": error.code(),
        "error_message": error.to_string(),
        "no_space": error.is_no_space(),
    })
}

fn print_stats(source: &Path, dest: &Path, stats: &CopyStats) {
    let bytes_str = format_bytes(stats.bytes_copied);

    #[cfg(unix)]
    println!(
        "Copied {} -> {} ({}, mode {}) in {:?}",
        source.display(),
        dest.display(),
        bytes_str,
        format_mode(stats.mode()),
        stats.duration
    );

    #[cfg(not(unix))]
    println!(
        "Copied {} -> {} ({}) in {:?}",
        source.display(),
        dest.display(),
        bytes_str,
        stats.duration
    );
}

fn print_json_value(value: &Value) -> CliResult<()> {
    let serialized =
        serde_json::to_string(value).map_err(|source| CliError::JsonSerialize { source })?;
    println!("{serialized}");
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(unix)]
fn format_mode(mode: u32) -> String {
    format!("{:04o}", mode)
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
