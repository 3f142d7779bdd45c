use std::fmt;

/// Custom error type for document cleanup operations
#[derive(Debug)]
pub enum CleanerError {
    /// A call to the document service failed
    Service {
        /// What was being attempted (e.g., "getting document list for 'doc'")
        context: String,
        message: String,
    },
    /// The document has no versions at all
    EmptyResult { document: String },
    /// A version identifier is not a base-10 integer
    Parse { version: String, message: String },
    /// Client configuration error
    Config(String),
}

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanerError::Service { context, message } => {
                write!(f, "Error {}: {}", context, message)
            }
            CleanerError::EmptyResult { document } => write!(
                f,
                "At least one document version must be found (document '{}' has none)",
                document
            ),
            CleanerError::Parse { version, message } => {
                write!(f, "Error parsing version number '{}': {}", version, message)
            }
            CleanerError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CleanerError {}

/// Result type alias for cleanup operations
pub type Result<T> = std::result::Result<T, CleanerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = CleanerError::Service {
            context: "deleting version 2 of 'doc'".to_string(),
            message: "AccessDenied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error deleting version 2 of 'doc': AccessDenied"
        );
    }

    #[test]
    fn test_empty_result_display() {
        let err = CleanerError::EmptyResult {
            document: "my-doc".to_string(),
        };
        assert!(err.to_string().contains("At least one document version"));
        assert!(err.to_string().contains("my-doc"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = CleanerError::Parse {
            version: "abc".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("'abc'"));
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_config_error_display() {
        let err = CleanerError::Config("No region".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("No region"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CleanerError>();
    }
}
