/// `txj`: decode deposit transactions from untrusted JSON text.
///
/// # Command overview
///
/// ```text
/// txj <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a transaction and print its summary
///   check      Report whether a transaction decodes, without the summary
///   schemas    List the registered transaction schemas
///   samples    Print reference inputs (one failing, one succeeding)
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                        |
/// |------|------------------------------------------------|
/// | 0    | Success                                        |
/// | 1    | Decode error, unreadable input, or bad usage   |
///
/// Errors and logs go to stderr so stdout can be piped cleanly.
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_check;
mod cmd_decode;
mod cmd_samples;
mod cmd_schemas;
mod input;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode deposit transactions from JSON text.
#[derive(Parser)]
#[command(name = "txj", version, about = "Typed transaction JSON decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a transaction and print its summary.
    Decode(DecodeArgs),
    /// Report whether a transaction decodes.
    Check(CheckArgs),
    /// List the registered transaction schemas.
    Schemas,
    /// Print reference inputs for the missing-gas case and the safe case.
    Samples,
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `txj decode`.
///
/// ```text
/// ┌─────────────────┬──────────────────────────────────────────────────┐
/// │ Flag            │ Effect                                           │
/// ├─────────────────┼──────────────────────────────────────────────────┤
/// │ --json          │ Print the record as a JSON object instead        │
/// │ --max-input-len │ Refuse inputs longer than N bytes (default 1 MiB)│
/// └─────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JSON object text, or `-` to read it from stdin.
    pub input: String,

    /// Print the decoded record as JSON.
    #[arg(long)]
    pub json: bool,

    /// Maximum accepted input size in bytes.
    #[arg(long, default_value_t = txj_decoder::DEFAULT_MAX_INPUT_LEN)]
    pub max_input_len: usize,
}

/// Arguments for `txj check`.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// The JSON object text, or `-` to read it from stdin.
    pub input: String,

    /// Maximum accepted input size in bytes.
    #[arg(long, default_value_t = txj_decoder::DEFAULT_MAX_INPUT_LEN)]
    pub max_input_len: usize,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Check(args) => cmd_check::run(&args),
        Commands::Schemas => cmd_schemas::run(),
        Commands::Samples => cmd_samples::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
