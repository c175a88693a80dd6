//! Error types for the strategy logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Destination name that the factory does not recognize
    #[error("Unsupported logger destination: '{0}'")]
    UnsupportedDestination(String),

    /// IO error with the operation and path that failed
    #[error("IO error while {operation} '{path}': {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an unsupported destination error
    pub fn unsupported_destination(name: impl Into<String>) -> Self {
        LoggerError::UnsupportedDestination(name.into())
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Whether this error comes from bad caller input rather than I/O
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LoggerError::UnsupportedDestination(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unsupported_destination("syslog");
        assert!(matches!(err, LoggerError::UnsupportedDestination(_)));
        assert!(err.is_invalid_argument());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unsupported_destination("syslog");
        assert_eq!(err.to_string(), "Unsupported logger destination: 'syslog'");

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = LoggerError::io_operation("writing log file", "log.txt", io_err);
        assert_eq!(
            err.to_string(),
            "IO error while writing log file 'log.txt': disk full"
        );
    }

    #[test]
    fn test_formatter_display() {
        let err = LoggerError::formatter("timestamp", "invalid strftime format '%Q'");
        assert_eq!(
            err.to_string(),
            "Formatter error (timestamp): invalid strftime format '%Q'"
        );
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_operation_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::io_operation("opening log file", "missing/log.txt", io_err);

        let source = err.source().expect("source is attached");
        assert!(source.to_string().contains("no such directory"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
