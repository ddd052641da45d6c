/// Error types for the IRD feature search
///
/// Every failure the pipeline can hit ends up as a `SearchError`. The binary
/// maps all of them to a non-zero exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading annotated feature files or writing the report
#[derive(Debug, Error)]
pub enum SearchError {
    /// Input path is missing, unreadable, permission-denied, or not UTF-8
    #[error("cannot read annotated file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-comment line did not split into 3, 4 or 5 tab-separated fields
    #[error("malformed record on line {line}: expected 3 to 5 tab-separated fields, found {field_count}")]
    MalformedRecord { line: usize, field_count: usize },

    /// Writing the report to the output stream failed
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, SearchError>;
