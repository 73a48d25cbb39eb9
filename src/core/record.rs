//! Log record structure

use super::fields::FieldSet;
use super::filters::Filters;
use super::log_level::{LevelName, LogLevel};
use super::message::MessageSource;
use chrono::{DateTime, Local};

/// One log event, built after the level gate passes and dropped after it
/// has been handed to every handler
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LevelName,
    pub message_parts: Vec<String>,
    pub fields: FieldSet,
    pub timestamp: DateTime<Local>,
}

impl Record {
    /// Evaluate the message source and capture the event time
    pub fn build(level: LevelName, message: MessageSource<'_>, fields: FieldSet) -> Self {
        Self {
            level,
            message_parts: message.into_parts(),
            fields,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Apply redaction rules to the joined message and the fields
    #[must_use]
    pub fn redact(mut self, filters: &Filters) -> Self {
        if filters.is_empty() {
            return self;
        }
        if !filters.message.is_empty() {
            let message = self.message();
            let filtered = filters.apply_message(&message);
            if filtered != message {
                self.message_parts = vec![filtered];
            }
        }
        self.fields = filters.apply_fields(&self.fields);
        self
    }

    pub fn message(&self) -> String {
        self.message_parts.join(" ")
    }

    pub fn rank_level(&self) -> LogLevel {
        self.level.rank_level()
    }
}
