//! Console line layout
//!
//! A rendered line looks like:
//!
//! ```text
//! [meta] SYMBOL LABEL___ MESSAGE__________________ key=value key=value
//! ```
//!
//! The label column is `LABEL_WIDTH` wide and the message column is at least
//! `MESSAGE_WIDTH` wide, so consecutive lines keep their columns aligned.
//! Only the symbol, the label and the field keys are painted.

use super::palette::{AnsiPalette, Palette};
use super::record::Record;
use super::style::{style_for, Style};
use serde::{Deserialize, Serialize};

/// Minimum visible width of the message column
pub const MESSAGE_WIDTH: usize = 25;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Bracketed prefix items written before the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metadata {
    Date,
    Time,
    Pid,
}

impl Metadata {
    fn format(self, record: &Record) -> String {
        match self {
            Metadata::Date => record.timestamp.format(DATE_FORMAT).to_string(),
            Metadata::Time => record.timestamp.format(TIME_FORMAT).to_string(),
            Metadata::Pid => std::process::id().to_string(),
        }
    }
}

pub struct ConsoleRenderer {
    palette: Box<dyn Palette>,
    metadata: Vec<Metadata>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            palette: Box::new(AnsiPalette),
            metadata: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_palette<P: Palette + 'static>(self, palette: P) -> Self {
        self.with_boxed_palette(Box::new(palette))
    }

    #[must_use]
    pub fn with_boxed_palette(mut self, palette: Box<dyn Palette>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Vec<Metadata>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn render(&self, record: &Record) -> String {
        self.render_styled(record, style_for(record.level))
    }

    pub fn render_styled(&self, record: &Record, style: &Style) -> String {
        let mut line = String::with_capacity(96);

        for meta in &self.metadata {
            line.push_str(&format!("[{}] ", meta.format(record)));
        }

        line.push_str(&self.palette.paint(style.symbol, style.color));
        line.push(' ');
        line.push_str(&self.palette.paint(style.label, style.color));
        line.push_str(&" ".repeat(style.label_padding() + 1));

        line.push_str(&format!("{:<width$}", record.message(), width = MESSAGE_WIDTH));

        if !record.fields.is_empty() {
            line.push(' ');
            line.push_str(&record.fields.render(style.color, self.palette.as_ref()));
        }

        line.push('\n');
        line
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
