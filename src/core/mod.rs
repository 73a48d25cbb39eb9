//! Core logger types and traits

pub mod config;
pub mod error;
pub mod fields;
pub mod filters;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod palette;
pub mod record;
pub mod renderer;
pub mod style;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use fields::{merge, Field, FieldSet, FieldValue};
pub use filters::{Filters, FILTERED};
pub use handler::Handler;
pub use log_level::{is_enabled, rank, LevelName, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use message::MessageSource;
pub use palette::{AnsiPalette, ColorEnv, ColorMode, Palette, PlainPalette, TerminalPalette};
pub use record::Record;
pub use renderer::{ConsoleRenderer, Metadata, MESSAGE_WIDTH};
pub use style::{style_for, style_for_name, Style, LABEL_WIDTH};
