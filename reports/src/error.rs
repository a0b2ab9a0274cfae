//! Errors raised while loading page inputs.
//!
//! Rendering itself is infallible once a [`crate::types::Catalog`] exists;
//! everything that can go wrong happens at the loading boundary.

use std::path::PathBuf;

/// Result alias for catalog and link construction.
pub type Result<T> = std::result::Result<T, ReportsError>;

/// Loading and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ReportsError {
    /// A descriptor has an empty link target
    #[error("report at index {index} has an empty href")]
    EmptyHref {
        /// Position of the offending descriptor
        index: usize,
    },

    /// A link was constructed from an empty href
    #[error("versioned link requires a non-empty href")]
    EmptyLink,

    /// Catalog file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid catalog JSON
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
