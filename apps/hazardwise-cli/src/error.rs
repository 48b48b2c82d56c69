//! CLI error types and exit codes

use hazardwise_core::HazardwiseError;
use hazardwise_docx::DocxError;
use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (I/O, storage, configuration)
/// - 4: Validation error or unknown record
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Project storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validation(_) | CliError::NotFound(_) => 4,
            CliError::Config(_) | CliError::Storage(_) | CliError::Io(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::NotFound(_) => Some("Run 'hazardwise hazard list' to see existing ids."),
            CliError::Storage(_) => {
                Some("Fix or remove the project file, or run 'hazardwise clear --yes' to start over.")
            }
            _ => None,
        }
    }
}

impl From<HazardwiseError> for CliError {
    fn from(e: HazardwiseError) -> Self {
        match e {
            HazardwiseError::InvalidInput { .. } => CliError::Validation(e.to_string()),
            HazardwiseError::NotFound { .. } => CliError::NotFound(e.to_string()),
            HazardwiseError::Io(message) => CliError::Io(message),
            HazardwiseError::Storage(message) => CliError::Storage(message),
        }
    }
}

impl From<DocxError> for CliError {
    fn from(e: DocxError) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_validation_error() {
        assert_eq!(CliError::Validation("test".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_io_error() {
        assert_eq!(CliError::Io("test".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_from_invalid_input_keeps_field() {
        let error: CliError = HazardwiseError::invalid_input("likelihood", "out of range").into();
        assert_eq!(error.exit_code(), 4);
        assert!(error.to_string().contains("likelihood"));
    }

    #[test]
    fn test_from_not_found() {
        let error: CliError = HazardwiseError::not_found("Hazard", Some("3".to_string())).into();
        assert!(matches!(error, CliError::NotFound(ref m) if m == "Hazard not found: 3"));
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn test_from_docx_error_is_io() {
        let error: CliError = DocxError::Io {
            path: "/nope/case.docx".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("/nope/case.docx"));
    }
}
