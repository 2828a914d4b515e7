//! partsplit CLI - split big files into parts and merge them back
//!
//! Parses arguments into explicit configs, runs the library operation and
//! reports the outcome as a JSON object on stdout plus a log line on stderr.

use clap::{Parser, Subcommand};
use partsplit::{EmptySourcePolicy, ErrorClass, MergeConfig, OverwritePolicy, Settings, SplitConfig};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Runtime failure (I/O, existing parts, unreadable settings)
const EXIT_FAILURE: u8 = 1;
/// Bad arguments, detected before any output was written
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "partsplit")]
#[command(about = "Split a big file into smaller parts and merge parts back into one file")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, global = true, default_value = "json")]
    format: OutputFormat,

    /// Settings file [default: <config dir>/partsplit/config.json]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a big file into smaller parts
    Split {
        /// The big file to split
        #[arg(long)]
        file: String,
        /// Maximal size per part in megabytes [default: from settings, 20]
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,
        /// Prefix of output files, the same as the file by default
        #[arg(short, long)]
        out: Option<String>,
        /// Overwrite part files that already exist
        #[arg(long)]
        force: bool,
        /// Fail on an empty file instead of producing no parts
        #[arg(long)]
        reject_empty: bool,
    },

    /// Merge smaller files (usually produced by split) into a big file
    Merge {
        /// File names separated by ,
        #[arg(long)]
        files: String,
        /// Output file name
        #[arg(short, long)]
        out: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("failed to load settings, error: {}", e);
            report_error(cli.format, &e);
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
    };
    debug!(?settings, "loaded settings");

    let code = match cli.command {
        Commands::Split {
            file,
            size,
            out,
            force,
            reject_empty,
        } => {
            let overwrite = if force {
                OverwritePolicy::Truncate
            } else {
                settings.overwrite
            };
            let empty_source = if reject_empty {
                EmptySourcePolicy::Reject
            } else {
                settings.empty_source
            };
            let size = size.unwrap_or(settings.default_size_mib);
            run_split(
                cli.format,
                PathBuf::from(file),
                size,
                out.map(PathBuf::from),
                overwrite,
                empty_source,
            )
        }

        Commands::Merge { files, out } => {
            let inputs: Vec<PathBuf> = files.split(',').map(PathBuf::from).collect();
            run_merge(cli.format, MergeConfig::new(inputs, out))
        }
    };

    Ok(code)
}

fn run_split(
    format: OutputFormat,
    file: PathBuf,
    size_mib: i64,
    out: Option<PathBuf>,
    overwrite: OverwritePolicy,
    empty_source: EmptySourcePolicy,
) -> ExitCode {
    let result = partsplit::mebibytes_to_bytes(size_mib).and_then(|chunk_size| {
        let mut config = SplitConfig::new(&file, chunk_size)
            .with_overwrite(overwrite)
            .with_empty_source(empty_source);
        if let Some(prefix) = out {
            config = config.with_prefix(prefix);
        }
        debug!(?config, "splitting");
        partsplit::split(&config)
    });

    match result {
        Ok(parts) => {
            let parts = display_all(&parts);
            info!("split file {} into parts: {:?}", file.display(), parts);
            output(
                format,
                &serde_json::json!({
                    "status": "ok",
                    "file": file.display().to_string(),
                    "count": parts.len(),
                    "parts": parts
                }),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to split file {}, error: {}", file.display(), e);
            report_error(format, &e);
            // A missing source is a bad argument to split
            match e.class() {
                ErrorClass::Usage | ErrorClass::NotFound => ExitCode::from(EXIT_USAGE),
                ErrorClass::Io => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

fn run_merge(format: OutputFormat, config: MergeConfig) -> ExitCode {
    let inputs = display_all(&config.inputs);
    debug!(?config, "merging");

    match partsplit::merge(&config) {
        Ok(()) => {
            info!(
                "merged parts {:?} into file {}",
                inputs,
                config.destination.display()
            );
            output(
                format,
                &serde_json::json!({
                    "status": "ok",
                    "files": inputs,
                    "out": config.destination.display().to_string()
                }),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("failed to merge files {:?}, error: {}", inputs, e);
            report_error(format, &e);
            match e.class() {
                ErrorClass::Usage => ExitCode::from(EXIT_USAGE),
                ErrorClass::NotFound | ErrorClass::Io => ExitCode::from(EXIT_FAILURE),
            }
        }
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set subscriber: {}", e))
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

fn report_error(format: OutputFormat, err: &partsplit::Error) {
    output(
        format,
        &serde_json::json!({
            "status": "error",
            "message": err.to_string()
        }),
    );
}

fn output(format: OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => println!("{}", value),
        OutputFormat::Text => println!("{:#}", value),
    }
}
