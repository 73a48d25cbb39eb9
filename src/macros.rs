//! Logging macros for ergonomic log message formatting.
//!
//! The level macros format their arguments like `format!`, but only after the
//! level gate has passed: a dropped call never formats anything.
//!
//! # Examples
//!
//! ```
//! use rust_console_logger::prelude::*;
//! use rust_console_logger::{fields, info};
//!
//! let logger = Logger::new(ConsoleHandler::new(BufferSink::new()));
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // Bound fields
//! let request = logger.with(fields!(request_id = "abc-123", attempt = 2));
//! info!(request, "Request accepted")?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_console_logger::prelude::*;
/// # let logger = Logger::new(ConsoleHandler::new(BufferSink::new()));
/// use rust_console_logger::log;
/// log!(logger, LevelName::Info, "Simple message")?;
/// log!(logger, LevelName::Error, "Error code: {}", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, $crate::MessageSource::deferred(|| format!($($arg)+)))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Fatal, $($arg)+)
    };
}

/// Log a success message (filtered at info rank).
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Success, $($arg)+)
    };
}

/// Log a waiting message (filtered at info rank).
#[macro_export]
macro_rules! wait {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LevelName::Wait, $($arg)+)
    };
}

/// Build a [`FieldSet`](crate::FieldSet) in the order written.
///
/// # Examples
///
/// ```
/// use rust_console_logger::fields;
///
/// let a = fields!(app = "myapp", port = 8080);
/// let b = fields!("app" => "myapp", "port" => 8080);
/// assert_eq!(a, b);
/// assert!(fields!().is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldSet::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        $crate::FieldSet::new()$(.with(stringify!($key), $value))+
    };
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::FieldSet::new()$(.with($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LevelName, LogLevel, Logger, PlainPalette};
    use crate::handlers::{BufferSink, ConsoleHandler};
    use std::cell::Cell;

    fn logger(level: LogLevel) -> (Logger, BufferSink) {
        let sink = BufferSink::new();
        let logger = Logger::builder()
            .min_level(level)
            .handler(ConsoleHandler::new(sink.clone()).with_palette(PlainPalette))
            .build()
            .unwrap();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger(LogLevel::Info);
        log!(logger, LevelName::Info, "Formatted: {}", 42).unwrap();
        assert!(sink.contents().contains("Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger(LogLevel::Debug);
        debug!(logger, "Count: {}", 5).unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        warn!(logger, "Retry {} of {}", 1, 3).unwrap();
        error!(logger, "Code: {}", 500).unwrap();
        fatal!(logger, "Critical failure: {}", "system").unwrap();
        success!(logger, "Deployed").unwrap();
        wait!(logger, "Waiting").unwrap();
        assert_eq!(sink.write_count(), 7);
    }

    #[test]
    fn test_macro_formats_lazily() {
        struct Counted<'a>(&'a Cell<u32>);

        impl std::fmt::Display for Counted<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.set(self.0.get() + 1);
                write!(f, "counted")
            }
        }

        let (logger, sink) = logger(LogLevel::Warn);
        let calls = Cell::new(0);

        debug!(logger, "{}", Counted(&calls)).unwrap();
        assert_eq!(calls.get(), 0);
        assert!(sink.is_empty());

        warn!(logger, "{}", Counted(&calls)).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fields_macro_keeps_order() {
        let set = fields!(zeta = 1, alpha = "a");
        assert_eq!(set.keys().collect::<Vec<_>>(), ["zeta", "alpha"]);
    }
}
