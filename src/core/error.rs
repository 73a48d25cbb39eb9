//! Error types for the console logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level name with no rank or style entry
    #[error("Unknown log level: '{name}'")]
    UnknownLevel { name: String },

    /// Write to a handler's sink failed
    #[error("Sink write failed in handler '{handler}': {source}")]
    SinkWrite {
        handler: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an unknown level error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { name: name.into() }
    }

    /// Wrap an IO error raised by a handler's sink
    pub fn sink_write(handler: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            handler: handler.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::config("LoggerConfig", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_level("verbose");
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));

        let err = LoggerError::config("LoggerConfig", "missing level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_level("verbose");
        assert_eq!(err.to_string(), "Unknown log level: 'verbose'");

        let err = LoggerError::config("LoggerConfig", "bad document");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: bad document"
        );
    }

    #[test]
    fn test_sink_write_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::sink_write("console", io_err);

        assert!(err.to_string().contains("console"));
        assert!(err.to_string().contains("pipe closed"));
        let source = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
        assert_eq!(source.map(|e| e.kind()), Some(std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoggerError = json_err.into();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
