//! Diagnostic output.
//!
//! Text output is one `file:line: message` line per finding. JSON output is a
//! single document for editors and other tooling.

use ledgerlint_validate::LintError;
use serde::Serialize;
use std::io::{self, Write};

/// A finding in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Source file path
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Category: "structural", "ordering", "format", "alignment" or "style"
    pub category: &'static str,
    /// Error message
    pub message: String,
}

/// JSON output structure for all findings.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// List of diagnostics
    pub diagnostics: Vec<JsonDiagnostic>,
    /// Total error count
    pub error_count: usize,
}

impl JsonOutput {
    /// Collect the findings for `file`.
    pub fn new(file: &str, errors: &[LintError]) -> Self {
        let diagnostics = errors
            .iter()
            .map(|error| JsonDiagnostic {
                file: file.to_string(),
                line: error.line,
                category: error.category().as_str(),
                message: error.message(),
            })
            .collect();
        Self {
            diagnostics,
            error_count: errors.len(),
        }
    }
}

/// Write findings as text, one per line.
pub fn write_text<W: Write>(file: &str, errors: &[LintError], writer: &mut W) -> io::Result<()> {
    for error in errors {
        writeln!(writer, "{file}:{error}")?;
    }
    Ok(())
}

/// Write findings as one pretty-printed JSON document.
pub fn write_json<W: Write>(file: &str, errors: &[LintError], writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonOutput::new(file, errors))?;
    writeln!(writer)
}
