use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("sheet `{0}` not found")]
    MissingSheet(String),

    #[error("sheet `{sheet}` has no column `{column}`")]
    MissingColumn { sheet: String, column: String },

    #[error("sheet `{sheet}` row {row} column `{column}`: {message}")]
    BadCell {
        sheet: String,
        row: usize,
        column: String,
        message: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workbook {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode workbook: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TableError {
    /// Input sheet missing or malformed.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            TableError::MissingSheet(_)
                | TableError::MissingColumn { .. }
                | TableError::BadCell { .. }
                | TableError::Read { .. }
                | TableError::Parse { .. }
        )
    }

    /// Output destination not writable.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, TableError::Write { .. } | TableError::Encode(_))
    }
}
