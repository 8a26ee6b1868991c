//! Error type for loading the launch record set.

use std::path::{Path, PathBuf};

/// Startup failure while building the record set. Always fatal: without the
/// records no chart can be produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("Launch records file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O or CSV parsing failure.
    #[error("Failed to read launch records from {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// One or more required columns are absent.
    #[error("Launch records schema mismatch: missing column(s) {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A column is present but cannot be read as the expected type.
    #[error("Column '{column}' has an unexpected type: {message}")]
    ColumnType { column: String, message: String },

    /// A single cell violates the schema.
    #[error("Invalid value in column '{column}' at row {row}: {reason}")]
    InvalidValue {
        row: usize,
        column: String,
        reason: String,
    },
}

impl LoadError {
    pub fn read(path: &Path, message: impl ToString) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn column_type(column: &str, message: impl ToString) -> Self {
        Self::ColumnType {
            column: column.to_string(),
            message: message.to_string(),
        }
    }

    pub fn invalid_value(row: usize, column: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the failure is about the file's shape rather than its presence.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. } | Self::ColumnType { .. } | Self::InvalidValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_lists_columns() {
        let err = LoadError::SchemaMismatch {
            missing: vec!["class".to_string(), "Launch Site".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("class, Launch Site"));
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_not_found_display() {
        let err = LoadError::NotFound(PathBuf::from("/data/missing.csv"));
        assert!(err.to_string().contains("/data/missing.csv"));
        assert!(!err.is_schema_error());
    }

    #[test]
    fn test_invalid_value_display() {
        let err = LoadError::invalid_value(3, "class", "expected 0 or 1, got 2");
        assert_eq!(
            err.to_string(),
            "Invalid value in column 'class' at row 3: expected 0 or 1, got 2"
        );
    }
}
