//! Structured JSONL logging and human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (~/.design-studio/logs/design-studio.jsonl) - structured, one event per line
//! - **Compact to stderr** - human-readable for developers
//!
//! # Usage
//!
//! ```rust,ignore
//! use design_studio::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init(false);
//!
//! // Use tracing macros directly
//! tracing::info!(event_type = "system_selected", system_id = "material", "Selected design system");
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "design-studio.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// `verbose` lowers the default filter to `debug`; `RUST_LOG` still wins when set.
/// When the log file cannot be opened only stderr output is installed.
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init(verbose: bool) -> LoggingGuard {
    let default_directive = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let log_path = log_path();
    let (non_blocking_file, file_guard) = match open_log_file(&log_path) {
        Some(file) => {
            // Non-blocking writer so a slow disk never stalls the CLI
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // JSONL layer for the log file (absent when the file could not be opened)
    let json_layer = non_blocking_file.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
    });

    // Compact layer for stderr (human developers)
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .init();

    tracing::debug!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        file_output = file_guard.is_some(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    let dir = path.parent()?;
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok()
}

/// Get the log directory path (~/.design-studio/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".design-studio").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("design-studio-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path_is_jsonl() {
        let path = log_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        assert!(path.ends_with(Path::new("logs").join(LOG_FILE_NAME)));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("logs").join(LOG_FILE_NAME);
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_fails_softly() {
        let dir = TempDir::new().unwrap();
        // A regular file where the log directory should be
        let blocker = dir.path().join("logs");
        fs::write(&blocker, "x").unwrap();
        assert!(open_log_file(&blocker.join(LOG_FILE_NAME)).is_none());
    }
}
