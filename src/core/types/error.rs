//! Error types for fixture generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while materializing a fixture store
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open store at {path}: {source}")]
    OpenStore {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to write metadata document {path}: {source}")]
    WriteMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown fixture variant: {0}")]
    UnknownVariant(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;

impl FixtureError {
    /// Creates a directory creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a store open error
    pub fn open_store(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        FixtureError::OpenStore {
            path: path.into(),
            source,
        }
    }

    /// Creates a metadata write error
    pub fn write_metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixtureError::WriteMetadata {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = FixtureError::UnknownVariant("mixed".to_string());
        assert_eq!(err.to_string(), "Unknown fixture variant: mixed");

        let err = FixtureError::create_dir(
            "/nope/test_data",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to create directory /nope/test_data: denied"
        );
    }

    #[test]
    fn test_helper_methods() {
        let err = FixtureError::write_metadata(
            "resources/metadata.json",
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        match err {
            FixtureError::WriteMetadata { path, source } => {
                assert_eq!(path, PathBuf::from("resources/metadata.json"));
                assert_eq!(source.to_string(), "disk full");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_implementations() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: FixtureError = io_err.into();
        assert!(matches!(err, FixtureError::Io(_)));

        let json_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err: FixtureError = json_err.into();
        assert!(matches!(err, FixtureError::Json(_)));

        let err: FixtureError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, FixtureError::Store(_)));
    }
}
