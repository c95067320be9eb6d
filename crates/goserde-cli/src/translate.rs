//! The translate command: read, parse, walk, emit, write.

use crate::OutputFormat;
use anyhow::{Context, Result};
use goserde_core::{LogLevel, TranslateConfig, emit_json, emit_rust, walk};
use goserde_logging::{ReloadHandle, init_logging};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Extension appended to the base name given on the command line
const INPUT_EXTENSION: &str = "go";

/// Command line options after parsing
#[derive(Debug, Clone)]
pub struct TranslateArgs {
    pub base: String,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub strict: bool,
    pub log_level: Option<LogLevel>,
}

/// Run one translation.
///
/// Nothing is written unless every step succeeds.
pub fn run(args: TranslateArgs) -> Result<()> {
    init_logging(args.log_level.unwrap_or(LogLevel::Warn));

    let config = load_config(&args)?;
    let reload = ReloadHandle::global();
    if args.log_level.is_none() && reload.is_initialized() {
        let level = config.level()?;
        if let Err(e) = reload.reload_level(level) {
            debug!(error = %e, "keeping initial log level");
        }
    }

    let input = input_path(&args.base);
    debug!(input = %input.display(), "reading Go source");
    let source = goserde_parser::parse_file(&input)
        .with_context(|| format!("Failed to translate {}", input.display()))?;

    let rendered = walk(&source, &config)
        .with_context(|| format!("Failed to translate {}", input.display()))?;

    let text = match args.format {
        OutputFormat::Rust => emit_rust(&rendered, &input.display().to_string(), &config),
        OutputFormat::Json => emit_json(&rendered).context("Failed to serialize output")?,
    };

    match &args.output {
        Some(path) => {
            write_output(path, &text)?;
            info!(output = %path.display(), "wrote generated code");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// `types` -> `types.go`. The extension is always appended, even when the
/// base already ends in `.go`.
pub fn input_path(base: &str) -> PathBuf {
    PathBuf::from(format!("{base}.{INPUT_EXTENSION}"))
}

/// Configuration file (or defaults) with command line overrides applied
fn load_config(args: &TranslateArgs) -> Result<TranslateConfig> {
    let mut config = match &args.config {
        Some(path) => TranslateConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TranslateConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut TranslateConfig, args: &TranslateArgs) {
    if args.strict {
        config.strict = true;
    }
    if let Some(level) = args.log_level {
        config.log_level = level.to_string().to_ascii_lowercase();
    }
}

/// Write through a temporary file in the target directory so a failed run
/// never leaves a truncated file behind.
fn write_output(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create output in {}", dir.display()))?;
    temp.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write output: {}", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to write output: {}", path.display()))?;
    Ok(())
}
