//! Error types for reference data and topology loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::reference::TableKind;

/// Errors that can occur while loading map inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited input (bad quoting, wrong field count, bad number).
    #[error("failed to parse {table} table {path}: {source}")]
    Csv {
        table: TableKind,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row parsed but carries an invalid value.
    #[error("invalid row {line} in {table} table {path}: {source}")]
    InvalidRow {
        table: TableKind,
        path: PathBuf,
        line: u64,
        #[source]
        source: dmap_model::ModelError,
    },

    /// Topology document could not be decoded.
    #[error("failed to parse topology {path}: {source}")]
    Topology {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Topology decoded but is structurally unusable.
    #[error("invalid topology {path}: {reason}")]
    InvalidTopology { path: PathBuf, reason: String },

    /// Reference data requested before every table finished loading.
    #[error("reference data not ready; waiting on: {}", format_tables(.missing))]
    TablesPending { missing: Vec<TableKind> },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

fn format_tables(tables: &[TableKind]) -> String {
    tables
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/dem.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/dem.csv");
    }

    #[test]
    fn test_pending_lists_tables() {
        let err = IngestError::TablesPending {
            missing: vec![TableKind::Democratic, TableKind::Republican],
        };
        assert_eq!(
            err.to_string(),
            "reference data not ready; waiting on: democratic, republican"
        );
    }

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::read("/data/gop.csv", io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
