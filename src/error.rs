use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Path does not exist or is not readable: {0}")]
    PathNotFound(PathBuf),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("no languages to rank")]
    EmptyInput,
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("Catalog request failed: {0}")]
    Catalog(#[from] reqwest::Error),
}

impl DetectError {
    /// True for the not-found family, whether a path or a lookup missed
    pub fn is_not_found(&self) -> bool {
        matches!(self, DetectError::PathNotFound(_) | DetectError::NotFound(_))
    }

    /// User-facing message with troubleshooting hints
    pub fn help_message(&self) -> String {
        match self {
            DetectError::PathNotFound(path) => format!(
                "Error: Path not found\nPath: {}\n\n\
                Help: The specified path does not exist or is not a directory. Please check:\n\
                - Is the path correct?\n\
                - Do you have permission to read it?",
                path.display()
            ),
            DetectError::Validation(msg) => format!(
                "Error: Invalid input\n\n\
                Help: Check the command-line flags and STACKMATCH_* variables.\n\n\
                Details: {}",
                msg
            ),
            DetectError::Catalog(err) => format!(
                "Error: Devfile registry unavailable\n\n\
                Help: The registry index could not be downloaded. Try:\n\
                - Check network connectivity\n\
                - Use a different registry: --registry <url>\n\
                - Increase STACKMATCH_HTTP_TIMEOUT\n\n\
                Details: {}",
                err
            ),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DetectError::PathNotFound(PathBuf::from("/nope"));
        assert_eq!(
            err.to_string(),
            "Path does not exist or is not readable: /nope"
        );

        let err = DetectError::Validation("bad range".to_string());
        assert_eq!(err.to_string(), "bad range");

        assert_eq!(DetectError::EmptyInput.to_string(), "no languages to rank");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DetectError::PathNotFound(PathBuf::from("/x")).is_not_found());
        assert!(DetectError::NotFound("no match".into()).is_not_found());
        assert!(!DetectError::EmptyInput.is_not_found());
    }

    #[test]
    fn test_help_message() {
        let help = DetectError::PathNotFound(PathBuf::from("/nope")).help_message();
        assert!(help.starts_with("Error: Path not found"));
        assert!(help.contains("/nope"));

        let help = DetectError::Validation("bad range".into()).help_message();
        assert!(help.contains("Details: bad range"));

        assert_eq!(
            DetectError::NotFound("No valid devfile found for project".into()).help_message(),
            "Error: No valid devfile found for project"
        );
    }
}
