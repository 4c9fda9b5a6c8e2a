//! Catalog error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::field::ProductField;

/// Failure while loading the catalog from a tab-separated source.
///
/// Lookups by id never produce an error; an absent product is `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not be opened (missing, or unreadable by this process).
    #[error("catalog source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be turned into a product. The whole load is aborted.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: MalformedReason },

    /// The source was opened but reading from it failed part-way.
    #[error("failed to read catalog source: {0}")]
    Io(#[from] io::Error),
}

impl CatalogError {
    pub fn malformed(line: usize, reason: MalformedReason) -> Self {
        Self::MalformedRecord { line, reason }
    }

    /// The 1-based source line a malformed record was found on.
    pub fn line(&self) -> Option<usize> {
        match self {
            CatalogError::MalformedRecord { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Why a single source line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("expected {expected} tab-separated fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("field `{field}` is not an integer: {value:?}")]
    InvalidInteger { field: ProductField, value: String },

    #[error("field `{field}` is empty")]
    EmptyField { field: ProductField },
}
