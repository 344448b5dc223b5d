//! Journal file loader.
//!
//! Reads a journal from disk into a [`SourceFile`] the linter can walk line
//! by line. Failing to find or read the file is a [`LoadError`], which the
//! command line reports as a startup error rather than a lint finding.
//!
//! # Example
//!
//! ```ignore
//! use ledgerlint_loader::load;
//! use std::path::Path;
//!
//! let source = load(Path::new("main.ledger"))?;
//! println!("{}: {} bytes", source.name(), source.text.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing exists at the path.
    #[error("{}: file not found", .path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but is a directory or other non-regular file.
    #[error("{}: not a regular file", .path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },

    /// IO error reading a file.
    #[error("failed to read file {}: {source}", .path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not UTF-8 text.
    #[error("{}: not valid UTF-8 text", .path.display())]
    InvalidUtf8 {
        /// The offending path.
        path: PathBuf,
    },
}

/// A journal read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The path the file was loaded from, as given.
    pub path: PathBuf,
    /// The file contents.
    pub text: String,
}

impl SourceFile {
    /// Create a source file from text already in memory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// The name used to prefix diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load a journal from `path`.
pub fn load(path: &Path) -> Result<SourceFile, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    tracing::debug!("Loaded {} ({} bytes)", path.display(), text.len());
    Ok(SourceFile::new(path, text))
}
