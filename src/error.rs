//! Error types for gearplan
//!
//! Uses `thiserror` for library errors. Plan evaluation itself never fails;
//! these errors cover reading, decoding and watching plan documents.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for gearplan operations
pub type GearplanResult<T> = Result<T, GearplanError>;

/// Main error type for gearplan operations
#[derive(Error, Debug)]
pub enum GearplanError {
    /// Plan file does not exist
    #[error("plan file not found: {path}")]
    PlanNotFound { path: PathBuf },

    /// No decoder for this file extension
    #[error("unsupported plan format '{extension}' for {path} (expected .json, .yaml or .yml)")]
    UnsupportedPlanFormat { path: PathBuf, extension: String },

    /// Plan document could not be decoded
    #[error("invalid plan in {file}: {message}")]
    PlanDecode { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File watcher failure
    #[error("watch error: {message}")]
    Watch { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GearplanError {
    /// Failure writing the report to `path`. Never reported as a missing plan.
    pub fn report_write(path: &Path, err: FsError) -> Self {
        let kind = match &err {
            FsError::NotFound(_) => io::ErrorKind::NotFound,
            FsError::PermissionDenied(_) => io::ErrorKind::PermissionDenied,
            FsError::Io(e) => e.kind(),
        };
        GearplanError::Io(io::Error::new(
            kind,
            format!("cannot write report {}: {}", path.display(), err),
        ))
    }
}

/// Read-side conversion: a missing file is the plan itself.
impl From<FsError> for GearplanError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => GearplanError::PlanNotFound { path },
            FsError::Io(e) => GearplanError::Io(e),
            other => GearplanError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

impl From<notify::Error> for GearplanError {
    fn from(err: notify::Error) -> Self {
        GearplanError::Watch {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_plan_decode() {
        let err = GearplanError::PlanDecode {
            file: PathBuf::from("trip/plan.json"),
            message: "expected value at line 3 column 5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid plan in trip/plan.json: expected value at line 3 column 5"
        );
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = GearplanError::UnsupportedPlanFormat {
            path: PathBuf::from("plan.txt"),
            extension: "txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported plan format 'txt' for plan.txt (expected .json, .yaml or .yml)"
        );
    }

    #[test]
    fn test_fs_not_found_becomes_plan_not_found() {
        let err: GearplanError = FsError::NotFound(PathBuf::from("missing.json")).into();
        assert!(matches!(err, GearplanError::PlanNotFound { .. }));
        assert_eq!(err.to_string(), "plan file not found: missing.json");
    }

    #[test]
    fn test_report_write_failure_names_report_path() {
        let path = PathBuf::from("gone/plan.json.output.html");
        let err = GearplanError::report_write(&path, FsError::NotFound(path.clone()));

        match &err {
            GearplanError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("cannot write report gone/plan.json.output.html"));
        assert!(!message.contains("plan file not found"));
    }
}
