//! Console handler implementation

use crate::core::{
    ColorMode, ConsoleRenderer, Handler, LogLevel, LoggerConfig, LoggerError, Metadata, Palette,
    Record, Result,
};
use std::io::{IsTerminal, Write};

const NAME: &str = "console";

/// Renders records with [`ConsoleRenderer`] and writes each line to a sink
/// with a single `write_all`
///
/// # Example
///
/// ```
/// use rust_console_logger::handlers::{BufferSink, ConsoleHandler};
/// use rust_console_logger::{ColorMode, LogLevel};
///
/// let sink = BufferSink::new();
/// let handler = ConsoleHandler::new(sink.clone())
///     .with_color_mode(ColorMode::Never)
///     .with_min_level(LogLevel::Warn);
/// ```
pub struct ConsoleHandler {
    writer: Box<dyn Write + Send>,
    renderer: ConsoleRenderer,
    min_level: Option<LogLevel>,
    is_terminal: bool,
}

impl ConsoleHandler {
    /// Write to any sink, always with ANSI colors
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            renderer: ConsoleRenderer::new(),
            min_level: None,
            is_terminal: false,
        }
    }

    /// Write to standard output, coloring only when stdout is a terminal
    pub fn stdout() -> Self {
        let stdout = std::io::stdout();
        let is_terminal = stdout.is_terminal();
        Self::new(stdout)
            .with_terminal(is_terminal)
            .with_color_mode(ColorMode::Auto)
    }

    /// Write to standard error, coloring only when stderr is a terminal
    pub fn stderr() -> Self {
        let stderr = std::io::stderr();
        let is_terminal = stderr.is_terminal();
        Self::new(stderr)
            .with_terminal(is_terminal)
            .with_color_mode(ColorMode::Auto)
    }

    /// Build from the console-related parts of a [`LoggerConfig`]
    pub fn from_config<W: Write + Send + 'static>(writer: W, config: &LoggerConfig) -> Self {
        Self::new(writer)
            .with_color_mode(config.color)
            .with_metadata(config.metadata.clone())
    }

    #[must_use]
    pub fn with_palette<P: Palette + 'static>(mut self, palette: P) -> Self {
        self.renderer = self.renderer.with_palette(palette);
        self
    }

    /// Whether the sink is a terminal, consulted by `ColorMode::Auto`
    #[must_use]
    pub fn with_terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.renderer = self
            .renderer
            .with_boxed_palette(mode.palette_for(self.is_terminal));
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Vec<Metadata>) -> Self {
        self.renderer = self.renderer.with_metadata(metadata);
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }
}

impl Handler for ConsoleHandler {
    fn handle(&mut self, record: &Record) -> Result<()> {
        let line = self.renderer.render(record);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::sink_write(NAME, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::sink_write(NAME, e))
    }

    fn name(&self) -> &str {
        NAME
    }

    fn min_level(&self) -> Option<LogLevel> {
        self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorEnv, FieldSet, LevelName, MessageSource, TerminalPalette};
    use crate::handlers::BufferSink;

    #[test]
    fn test_handle_writes_one_line() {
        let sink = BufferSink::new();
        let mut handler = ConsoleHandler::new(sink.clone()).with_color_mode(ColorMode::Never);
        let record = Record::build(LevelName::Info, MessageSource::from("ready"), FieldSet::new());

        handler.handle(&record).unwrap();

        assert_eq!(sink.contents(), "ℹ info    ready                    \n");
        assert_eq!(sink.write_count(), 1);
    }

    #[test]
    fn test_terminal_palette_tracks_sink() {
        let record = Record::build(LevelName::Info, MessageSource::from("ready"), FieldSet::new());

        let redirected = BufferSink::new();
        let mut handler = ConsoleHandler::new(redirected.clone())
            .with_palette(TerminalPalette::with_env(false, ColorEnv::default()));
        handler.handle(&record).unwrap();
        assert_eq!(redirected.contents(), "ℹ info    ready                    \n");

        let tty = BufferSink::new();
        let mut handler = ConsoleHandler::new(tty.clone())
            .with_palette(TerminalPalette::with_env(true, ColorEnv::default()));
        handler.handle(&record).unwrap();
        assert_eq!(
            tty.contents(),
            "\x1b[32mℹ\x1b[0m \x1b[32minfo\x1b[0m    ready                    \n"
        );
    }

    #[test]
    fn test_write_error_is_surfaced() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut handler = ConsoleHandler::new(BrokenPipe);
        let record = Record::build(LevelName::Error, MessageSource::from("x"), FieldSet::new());

        let err = handler.handle(&record).unwrap_err();
        assert!(matches!(err, LoggerError::SinkWrite { ref handler, .. } if handler == "console"));
    }

    #[test]
    fn test_min_level() {
        let handler = ConsoleHandler::new(BufferSink::new()).with_min_level(LogLevel::Error);
        assert!(!handler.accepts(LogLevel::Warn));
        assert!(handler.accepts(LogLevel::Fatal));
        assert_eq!(handler.name(), "console");
    }
}
