//! Handler trait for log output destinations

use super::{error::Result, log_level::LogLevel, record::Record};

/// Receives every record a logger admits
///
/// A handler may narrow the logger's threshold further through `min_level`;
/// it is never asked to handle a record the logger itself dropped.
pub trait Handler: Send {
    fn handle(&mut self, record: &Record) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;

    fn min_level(&self) -> Option<LogLevel> {
        None
    }

    /// Whether this handler wants a record at `level`
    fn accepts(&self, level: LogLevel) -> bool {
        self.min_level().map_or(true, |min| level >= min)
    }
}
