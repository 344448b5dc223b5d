//! Implementation of the `ledgerlint` command.

use crate::report;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ledgerlint_validate::{lint_with_options, LintOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line: message` lines (default)
    #[default]
    Text,
    /// JSON output for editor integration
    Json,
}

/// Check a ledger journal's sections, ordering and column layout.
#[derive(Parser, Debug)]
#[command(name = "ledgerlint", author, version, about, long_about = None)]
pub struct Args {
    /// The journal to check
    #[arg(short, long, value_name = "FILE", env = "LEDGER_FILE")]
    pub file: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress all output (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Require balance assertions on transfer-like postings
    #[arg(long)]
    pub expect_assertions: bool,
}

/// Lint the journal named by `args`, writing findings to `writer`.
///
/// Returns the exit code: success only if there were no findings.
pub fn run<W: Write>(args: &Args, writer: &mut W) -> Result<ExitCode> {
    let Some(path) = args.file.as_deref() else {
        anyhow::bail!("no journal given: pass --file or set LEDGER_FILE");
    };
    let source = ledgerlint_loader::load(path).context("could not load journal")?;

    let options = LintOptions {
        expect_assertions: args.expect_assertions,
    };
    let errors = lint_with_options(&source.text, options);

    if !args.quiet {
        let name = source.name();
        match args.format {
            OutputFormat::Text => report::write_text(&name, &errors, writer),
            OutputFormat::Json => report::write_json(&name, &errors, writer),
        }
        .context("failed to write diagnostics")?;
        writer.flush()?;
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Main entry point for the `ledgerlint` binary.
pub fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .init();
    }

    let mut stdout = io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
