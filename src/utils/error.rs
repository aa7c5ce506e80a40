use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClasspathError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Cannot resolve classpath element '{locator}' as URL: {reason}")]
    UrlResolution { locator: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed properties line {line}: '{content}'")]
    PropertiesParse { line: usize, content: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Resolution,
    Io,
    Configuration,
}

impl ClasspathError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ClasspathError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClasspathError::InvalidArgument { .. } => ErrorCategory::Argument,
            ClasspathError::UrlResolution { .. } => ErrorCategory::Resolution,
            ClasspathError::IoError(_) | ClasspathError::PropertiesParse { .. } => {
                ErrorCategory::Io
            }
            ClasspathError::ConfigValidationError { .. }
            | ClasspathError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClasspathError::InvalidArgument { message } => {
                format!("Rejected classpath input: {}", message)
            }
            ClasspathError::UrlResolution { locator, .. } => {
                format!("Classpath element '{}' is not a usable path or URL", locator)
            }
            ClasspathError::IoError(e) => format!("Could not read or write a file: {}", e),
            ClasspathError::PropertiesParse { line, .. } => {
                format!("Fork properties file is malformed at line {}", line)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Argument => "Pass a non-empty classpath element",
            ErrorCategory::Resolution => "Check that the element is a valid path or absolute URL",
            ErrorCategory::Io => "Check that the file exists and contains key=value lines",
            ErrorCategory::Configuration => "Review the TOML configuration or command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClasspathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_category() {
        let err = ClasspathError::invalid_argument("null element");
        assert_eq!(err.category(), ErrorCategory::Argument);
        assert_eq!(err.to_string(), "Invalid argument: null element");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ClasspathError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.user_friendly_message().contains("gone"));
    }

    #[test]
    fn test_parse_error_mentions_line() {
        let err = ClasspathError::PropertiesParse {
            line: 3,
            content: "garbage".to_string(),
        };
        assert!(err.user_friendly_message().contains('3'));
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
