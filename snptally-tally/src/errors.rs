use std::io;

use thiserror::Error;

/// Error type for fatal tally setup failures.
///
/// Per-sample alignment problems are deliberately not represented here; they
/// are recovered inside the engine (reported, sample left empty) so one bad
/// sample cannot abort a multi-sample run.
#[derive(Error, Debug)]
pub enum TallyError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A candidate SNP list file could not be opened.
    #[error("Unable to open SNP list file {path}: {reason}")]
    SnpListOpen { path: String, reason: String },

    /// No candidate coordinates survived loading; nothing to tally.
    #[error("No starting SNP coordinates loaded from SNP list files")]
    NoSnpsLoaded,

    /// Unknown output format selector.
    #[error("Invalid output format option: {0}")]
    InvalidFormat(String),
}

/// Result type alias for tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
