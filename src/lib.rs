//! # Rust Console Logger
//!
//! A leveled console logger for CLI tools and scripts. Each call renders one
//! line with a colored symbol and label, an aligned message column and
//! trailing `key=value` fields:
//!
//! ```text
//! ℹ info    Successfully deployed     app=myapp env=prod
//! ⚠ warning Disk almost full          free=2%
//! ```
//!
//! ## Features
//!
//! - **Level gating**: calls below the threshold do nothing, and deferred
//!   messages are never computed
//! - **Fields**: global, chained (`logger.with(..)`) and call-site fields,
//!   merged with call-site taking precedence
//! - **Pluggable output**: handlers receive built records; the console
//!   handler writes to any `io::Write`
//! - **Color control**: ANSI, plain or environment-detected palettes
//!
//! ```
//! use rust_console_logger::prelude::*;
//!
//! let sink = BufferSink::new();
//! let logger = Logger::builder()
//!     .handler(ConsoleHandler::new(sink.clone()).with_color_mode(ColorMode::Never))
//!     .fields(FieldSet::from([("app", "myapp")]))
//!     .build()?;
//!
//! logger.info(["Successfully", "deployed"])?;
//! assert_eq!(sink.contents(), "ℹ info    Successfully deployed     app=myapp\n");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        ColorMode, FieldSet, FieldValue, Filters, Handler, LevelName, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, MessageSource, Metadata, Record, Result,
    };
    pub use crate::handlers::{BufferSink, ConsoleHandler};
}

pub use crate::core::{
    is_enabled, style_for, style_for_name, AnsiPalette, ColorEnv, ColorMode, ConsoleRenderer,
    Field, FieldSet, FieldValue, Filters, Handler, LevelName, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, MessageSource, Metadata, Palette, PlainPalette, Record, Result,
    Style, TerminalPalette,
};
pub use handlers::{BufferSink, ConsoleHandler};
