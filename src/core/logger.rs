//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    fields::FieldSet,
    filters::Filters,
    handler::Handler,
    log_level::{is_enabled, LevelName, LogLevel},
    message::MessageSource,
    record::Record,
};
use crate::handlers::ConsoleHandler;
use parking_lot::Mutex;
use std::sync::Arc;

/// Leveled logger facade
///
/// Cloning a logger, or deriving one with [`Logger::with`] or
/// [`Logger::at_level`], shares the handlers. The derived logger carries its
/// own immutable field set; the parent is never changed.
///
/// Each call first compares its level against the configured threshold.
/// A dropped call has no effect at all: no handler is touched and a deferred
/// message is never computed. An admitted call builds one record and hands
/// it to every handler that accepts its level.
///
/// # Example
///
/// ```
/// use rust_console_logger::handlers::{BufferSink, ConsoleHandler};
/// use rust_console_logger::Logger;
///
/// let sink = BufferSink::new();
/// let logger = Logger::new(ConsoleHandler::new(sink.clone()));
///
/// logger.with([("app", "myapp")]).info("Successfully deployed")?;
/// logger.debug("not shown")?;
///
/// assert_eq!(sink.write_count(), 1);
/// # Ok::<(), rust_console_logger::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    handlers: Arc<Mutex<Vec<Box<dyn Handler>>>>,
    min_level: LogLevel,
    fields: FieldSet,
    filters: Arc<Filters>,
}

impl Logger {
    /// Logger at the default `info` level writing to one handler
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self::from_parts(
            vec![Box::new(handler)],
            LogLevel::default(),
            FieldSet::new(),
            Filters::default(),
        )
    }

    fn from_parts(
        handlers: Vec<Box<dyn Handler>>,
        min_level: LogLevel,
        fields: FieldSet,
        filters: Filters,
    ) -> Self {
        Self {
            handlers: Arc::new(Mutex::new(handlers)),
            min_level,
            fields,
            filters: Arc::new(filters),
        }
    }

    /// Build a logger from a configuration document and a handler
    ///
    /// Fails with `UnknownLevel` if the configured level has no rank.
    pub fn from_config<H: Handler + 'static>(config: &LoggerConfig, handler: H) -> Result<Self> {
        Ok(Self::from_parts(
            vec![Box::new(handler)],
            config.min_level()?,
            config.fields.clone(),
            config.filters.clone(),
        ))
    }

    pub fn level(&self) -> LogLevel {
        self.min_level
    }

    /// Fields bound at construction or by chaining
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    #[inline]
    pub fn enabled(&self, level: impl Into<LevelName>) -> bool {
        is_enabled(self.min_level, level.into())
    }

    /// Derive a logger whose fields are `merge(self.fields(), fields)`
    #[must_use]
    pub fn with(&self, fields: impl Into<FieldSet>) -> Logger {
        Logger {
            handlers: Arc::clone(&self.handlers),
            min_level: self.min_level,
            fields: self.fields.merge(&fields.into()),
            filters: Arc::clone(&self.filters),
        }
    }

    /// Derive a logger with a different threshold
    #[must_use]
    pub fn at_level(&self, level: LogLevel) -> Logger {
        Logger {
            min_level: level,
            ..self.clone()
        }
    }

    /// Run `f` with a logger temporarily set to `level`
    ///
    /// ```
    /// # use rust_console_logger::handlers::{BufferSink, ConsoleHandler};
    /// # use rust_console_logger::{Logger, LogLevel};
    /// # let sink = BufferSink::new();
    /// let logger = Logger::new(ConsoleHandler::new(sink.clone()));
    ///
    /// logger.log_at(LogLevel::Debug, |log| log.debug("visible"))?;
    /// logger.debug("hidden")?;
    ///
    /// assert_eq!(sink.write_count(), 1);
    /// # Ok::<(), rust_console_logger::LoggerError>(())
    /// ```
    pub fn log_at<R>(&self, level: LogLevel, f: impl FnOnce(&Logger) -> R) -> R {
        f(&self.at_level(level))
    }

    /// Attach another handler; every logger sharing these handlers sees it
    pub fn add_handler<H: Handler + 'static>(&self, handler: H) {
        self.handlers.lock().push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn log<'a>(
        &self,
        level: impl Into<LevelName>,
        message: impl Into<MessageSource<'a>>,
    ) -> Result<()> {
        self.log_with_fields(level, message, FieldSet::new())
    }

    /// Log with call-site fields; these win over bound fields on key clashes
    pub fn log_with_fields<'a>(
        &self,
        level: impl Into<LevelName>,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        let level = level.into();
        if !self.enabled(level) {
            return Ok(());
        }

        let fields = self.fields.merge(&fields.into());
        let record = Record::build(level, message.into(), fields).redact(&self.filters);
        self.dispatch(&record)
    }

    /// Hand a record to every accepting handler; the first error wins but
    /// the remaining handlers still run
    fn dispatch(&self, record: &Record) -> Result<()> {
        let rank_level = record.rank_level();
        let mut handlers = self.handlers.lock();
        let mut first_error = None;

        for handler in handlers.iter_mut() {
            if !handler.accepts(rank_level) {
                continue;
            }
            if let Err(e) = handler.handle(record) {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Flush every handler, returning the first failure
    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.lock();
        let mut first_error = None;

        for handler in handlers.iter_mut() {
            if let Err(e) = handler.flush() {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    #[inline]
    pub fn debug<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Debug, message)
    }

    #[inline]
    pub fn info<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Info, message)
    }

    #[inline]
    pub fn warn<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Warn, message)
    }

    #[inline]
    pub fn error<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Error, message)
    }

    #[inline]
    pub fn fatal<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Fatal, message)
    }

    #[inline]
    pub fn success<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Success, message)
    }

    #[inline]
    pub fn wait<'a>(&self, message: impl Into<MessageSource<'a>>) -> Result<()> {
        self.log(LevelName::Wait, message)
    }

    pub fn debug_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Debug, message, fields)
    }

    pub fn info_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Info, message, fields)
    }

    pub fn warn_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Warn, message, fields)
    }

    pub fn error_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Error, message, fields)
    }

    pub fn fatal_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Fatal, message, fields)
    }

    pub fn success_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Success, message, fields)
    }

    pub fn wait_with_fields<'a>(
        &self,
        message: impl Into<MessageSource<'a>>,
        fields: impl Into<FieldSet>,
    ) -> Result<()> {
        self.log_with_fields(LevelName::Wait, message, fields)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_console_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .level_name("debug")
///     .handler(ConsoleHandler::new(BufferSink::new()))
///     .fields(FieldSet::from([("app", "myapp")]))
///     .build()?;
///
/// assert_eq!(logger.level(), LogLevel::Debug);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    level_name: Option<String>,
    handlers: Vec<Box<dyn Handler>>,
    fields: FieldSet,
    filters: Filters,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::default(),
            level_name: None,
            handlers: Vec::new(),
            fields: FieldSet::new(),
            filters: Filters::default(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self.level_name = None;
        self
    }

    /// Set minimum log level by name; checked in [`LoggerBuilder::build`]
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, name: impl Into<String>) -> Self {
        self.level_name = Some(name.into());
        self
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Set the global fields
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: impl Into<FieldSet>) -> Self {
        self.fields = fields.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Build the Logger
    ///
    /// With no handler configured the logger writes to standard error.
    pub fn build(self) -> Result<Logger> {
        let min_level = match self.level_name {
            Some(name) => name.parse()?,
            None => self.min_level,
        };

        let mut handlers = self.handlers;
        if handlers.is_empty() {
            handlers.push(Box::new(ConsoleHandler::stderr()));
        }

        Ok(Logger::from_parts(handlers, min_level, self.fields, self.filters))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
