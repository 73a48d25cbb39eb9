//! Logger configuration document
//!
//! Every key is optional:
//!
//! ```json
//! {
//!   "level": "info",
//!   "fields": { "app": "myapp" },
//!   "filters": { "message": ["hunter2"], "fields": ["password"] },
//!   "metadata": ["date", "time"],
//!   "color": "auto"
//! }
//! ```

use super::error::Result;
use super::fields::FieldSet;
use super::filters::Filters;
use super::log_level::LogLevel;
use super::palette::ColorMode;
use super::renderer::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level name, validated when the logger is built
    pub level: String,
    pub fields: FieldSet,
    pub filters: Filters,
    pub metadata: Vec<Metadata>,
    pub color: ColorMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default().to_str().to_string(),
            fields: FieldSet::new(),
            filters: Filters::default(),
            metadata: Vec::new(),
            color: ColorMode::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the configured level; fails with `UnknownLevel`
    pub fn min_level(&self) -> Result<LogLevel> {
        self.level.parse()
    }
}
