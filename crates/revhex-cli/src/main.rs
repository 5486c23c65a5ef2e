/// Reverse hex command-line tool: encode, decode, validate, and convert
/// reverse hexadecimal text.
///
/// # Command overview
///
/// ```text
/// revhex <COMMAND> [OPTIONS]
///
/// Commands:
///   encode     Encode bytes as reverse hex
///   decode     Decode reverse hex back to bytes
///   validate   Check that input is well-formed reverse hex
///   convert    Translate between standard hex and reverse hex
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Raise log verbosity (repeatable)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// `INPUT` defaults to stdin and `-o` to stdout; `-` also means stdin.
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, malformed input, etc.)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_convert;
mod cmd_decode;
mod cmd_encode;
mod cmd_validate;
mod logging;
mod streams;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Reverse hexadecimal encoder and decoder.
#[derive(Parser)]
#[command(name = "revhex", version, about = "Reverse hex (z-k alphabet) codec")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity: `-v` for debug, `-vv` for trace.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes as reverse hex.
    Encode(EncodeArgs),
    /// Decode reverse hex back to bytes.
    Decode(DecodeArgs),
    /// Check that input is well-formed reverse hex.
    Validate(ValidateArgs),
    /// Translate between standard hex and reverse hex.
    Convert(ConvertArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `revhex encode`.
///
/// Streams the input through the reverse hex encoder, so input size is not
/// limited by memory.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// File to encode (stdin when absent or `-`).
    pub input: Option<PathBuf>,

    /// Write encoded text to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Terminate the output with a newline.
    #[arg(short, long)]
    pub newline: bool,
}

/// Arguments for `revhex decode`.
///
/// ```text
/// ┌─────────────────────┬───────────────────────────────────────────────┐
/// │ Flag                │ Effect                                        │
/// ├─────────────────────┼───────────────────────────────────────────────┤
/// │ -o / --output       │ write decoded bytes to a file                 │
/// │ --ignore-whitespace │ drop ASCII whitespace (newlines, wrapping)    │
/// └─────────────────────┴───────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// File to decode (stdin when absent or `-`).
    pub input: Option<PathBuf>,

    /// Write decoded bytes to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip ASCII whitespace in the input instead of rejecting it.
    #[arg(short, long)]
    pub ignore_whitespace: bool,
}

/// Arguments for `revhex validate`.
///
/// Decodes the input, discarding the output, and reports the decoded size
/// or the first problem found.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// File to check (stdin when absent or `-`).
    pub input: Option<PathBuf>,

    /// Skip ASCII whitespace in the input instead of rejecting it.
    #[arg(short, long)]
    pub ignore_whitespace: bool,
}

/// Arguments for `revhex convert`.
///
/// By default the argument is standard hex and the result is reverse hex;
/// `--to-hex` goes the other way.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// The text to translate.
    pub text: String,

    /// Treat the argument as reverse hex and print standard hex.
    #[arg(long)]
    pub to_hex: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let result = match cli.command {
        Commands::Encode(args) => cmd_encode::run(&args),
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Convert(args) => cmd_convert::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
