use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for user-facing reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable, the system is skipped
    Error,    // operation failed, may be retried
    Critical, // nothing usable left
}

/// Domain-specific errors for the design studio
#[derive(Error, Debug)]
pub enum DesignStudioError {
    #[error("Failed to read design system '{id}' from {}: {source}", path.display())]
    SystemRead {
        id: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse design system '{id}': {source}")]
    SystemParse {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No design systems found")]
    NoSystems,

    #[error("Unknown design system: {0}")]
    UnknownSystem(String),

    #[error("Export packaging failed: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DesignStudioError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemRead { .. } => ErrorSeverity::Warning,
            Self::SystemParse { .. } => ErrorSeverity::Warning,
            Self::NoSystems => ErrorSeverity::Critical,
            Self::UnknownSystem(_) => ErrorSeverity::Info,
            Self::Archive(_) => ErrorSeverity::Error,
            Self::Io(_) => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::SystemRead { id, .. } => format!("Could not load the {} design system", id),
            Self::SystemParse { id, .. } => {
                format!("The {} design system definition is malformed", id)
            }
            Self::NoSystems => "No design systems found".to_string(),
            Self::UnknownSystem(id) => format!("There is no design system called '{}'", id),
            Self::Archive(_) | Self::Io(_) => {
                "Failed to export design system. Please try again.".to_string()
            }
            Self::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, DesignStudioError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use design_studio::error::ResultExt;
///
/// // Drop a system that fails to load and keep going
/// let system = load_design_system(&path, "material").log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
