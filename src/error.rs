/// Error types for loading icons and reading configuration
///
/// Load errors travel inside iced messages, so they must be `Clone`;
/// I/O failures are captured as their message text.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while selecting or reading SVG files
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("Not a folder: {}", .0.display())]
    NotAFolder(PathBuf),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Errors that can occur when loading the viewer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message() {
        let err = LoadError::Read {
            path: PathBuf::from("/tmp/a.svg"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to read /tmp/a.svg: permission denied");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("Failed to parse config JSON"));
    }
}
