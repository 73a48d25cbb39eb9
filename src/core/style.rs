//! Per-level visual metadata

use super::error::Result;
use super::log_level::LevelName;
use colored::Color;

/// Visible width of the severity column
pub const LABEL_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub symbol: &'static str,
    pub label: &'static str,
}

impl Style {
    /// Spaces needed after the label to reach `LABEL_WIDTH`
    pub fn label_padding(&self) -> usize {
        LABEL_WIDTH.saturating_sub(self.label.chars().count())
    }

    pub fn padded_label(&self) -> String {
        format!("{:<width$}", self.label, width = LABEL_WIDTH)
    }
}

// Indexed by `LevelName as usize`.
static STYLES: [Style; 7] = [
    Style { color: Color::Cyan, symbol: "•", label: "debug" },
    Style { color: Color::Green, symbol: "ℹ", label: "info" },
    Style { color: Color::Yellow, symbol: "⚠", label: "warning" },
    Style { color: Color::Red, symbol: "⨯", label: "error" },
    Style { color: Color::Red, symbol: "!", label: "fatal" },
    Style { color: Color::Green, symbol: "✔", label: "success" },
    Style { color: Color::Cyan, symbol: "…", label: "waiting" },
];

#[inline]
pub fn style_for(level: LevelName) -> &'static Style {
    &STYLES[level as usize]
}

/// Look up a style by level name
pub fn style_for_name(name: &str) -> Result<&'static Style> {
    name.parse::<LevelName>().map(style_for)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_every_level_has_style() {
        for level in LevelName::ALL {
            let style = style_for(level);
            assert_eq!(style.symbol.chars().count(), 1, "{level}");
            assert_eq!(style.padded_label().chars().count(), LABEL_WIDTH);
        }
    }

    #[test]
    fn test_table_entries() {
        assert_eq!(style_for(LevelName::Warn).label, "warning");
        assert_eq!(style_for(LevelName::Warn).color, Color::Yellow);
        assert_eq!(style_for(LevelName::Wait).label, "waiting");
        assert_eq!(style_for(LevelName::Wait).color, Color::Cyan);
        assert_eq!(style_for(LevelName::Fatal).color, Color::Red);
        assert_eq!(style_for(LevelName::Success).symbol, "✔");
    }

    #[test]
    fn test_label_padding() {
        assert_eq!(style_for(LevelName::Info).label_padding(), 3);
        assert_eq!(style_for(LevelName::Debug).padded_label(), "debug  ");
        assert_eq!(style_for(LevelName::Success).label_padding(), 0);
    }

    #[test]
    fn test_style_for_name() {
        assert_eq!(style_for_name("info").unwrap().label, "info");
        assert!(matches!(
            style_for_name("notice"),
            Err(LoggerError::UnknownLevel { .. })
        ));
    }
}
