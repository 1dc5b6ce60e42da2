use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Filesystem,
    Configuration,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::SerializationError(_) => ErrorCategory::Input,
            ExportError::IoError(_) => ErrorCategory::Filesystem,
            ExportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the file is a complete JSON board export",
            ErrorCategory::Filesystem => {
                "Check that the input file exists and the output directory is writable"
            }
            ErrorCategory::Configuration => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let io = ExportError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.category(), ErrorCategory::Filesystem);

        let json = ExportError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(json.category(), ErrorCategory::Input);

        let invalid = ExportError::InvalidConfigValueError {
            field: "json_file".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(
            invalid.to_string(),
            "Invalid value for 'json_file' (): Path cannot be empty"
        );
    }
}
