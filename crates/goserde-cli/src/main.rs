//! goserde CLI - Go struct to serde struct translator
//!
//! Reads `<BASE>.go`, translates every struct type declaration into a Rust
//! struct with serde attributes, and writes the result to stdout or a file.

use clap::{Parser, ValueEnum};
use goserde_core::LogLevel;
use std::path::PathBuf;

mod translate;

#[derive(Parser)]
#[command(name = "goserde")]
#[command(author, version, about = "Translate Go structs into serde structs", long_about = None)]
struct Cli {
    /// Input base name; the file read is "<BASE>.go"
    base: String,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Rust)]
    format: OutputFormat,

    /// Fail on unsupported type expressions instead of emitting a placeholder
    #[arg(long)]
    strict: bool,

    /// Log level: trace, debug, info, warn, error or off (overrides config)
    #[arg(long, value_name = "LVL")]
    log_level: Option<LogLevel>,
}

/// Output text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust source with serde attributes
    Rust,
    /// The rendered model as JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    translate::run(translate::TranslateArgs {
        base: cli.base,
        output: cli.output,
        config: cli.config,
        format: cli.format,
        strict: cli.strict,
        log_level: cli.log_level,
    })
}
