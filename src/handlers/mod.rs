//! Handler implementations

pub mod buffer;
pub mod console;

pub use buffer::BufferSink;
pub use console::ConsoleHandler;

pub use crate::core::Handler;
