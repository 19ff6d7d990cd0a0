//! Error types for loading and comparing benchmark logs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for comparison operations.
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that abort a comparison run.
#[derive(Debug, Error)]
pub enum CompareError {
    /// An input log does not exist.
    #[error("File not found at {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// An input log exists but could not be opened.
    #[error("failed to open benchmark log '{}'", path.display())]
    Open {
        /// The log path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading an input log failed midway.
    #[error("failed to read benchmark log '{}'", path.display())]
    Read {
        /// The log path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Neither log contained a single benchmark result.
    #[error(
        "Could not load results from '{}' or '{}'",
        baseline.display(),
        compare.display()
    )]
    NoResults {
        /// The baseline log path.
        baseline: PathBuf,
        /// The compare log path.
        compare: PathBuf,
    },

    /// The report file could not be written.
    #[error("failed to write report '{}'", path.display())]
    Write {
        /// The report path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
