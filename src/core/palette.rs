//! Style backends
//!
//! The renderer never writes escape sequences itself. It asks a `Palette` to
//! paint a piece of text, so colors can be switched off (or forced on)
//! without touching the layout code.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::env;

pub trait Palette: Send + Sync {
    fn paint(&self, text: &str, color: Color) -> String;
}

/// Always emits ANSI foreground sequences: `ESC[<fg>m text ESC[0m`
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn paint(&self, text: &str, color: Color) -> String {
        format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
    }
}

/// Leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

/// Color switches read from the environment
///
/// `NO_COLOR` wins over `CLICOLOR_FORCE`, which wins over `CLICOLOR=0`.
/// With none of them set, color follows the target stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorEnv {
    pub no_color: bool,
    pub clicolor_force: bool,
    pub clicolor_off: bool,
}

impl ColorEnv {
    pub fn from_env() -> Self {
        let enabled = |name: &str| env::var(name).map_or(false, |v| !v.is_empty() && v != "0");
        Self {
            no_color: enabled("NO_COLOR"),
            clicolor_force: enabled("CLICOLOR_FORCE"),
            clicolor_off: env::var("CLICOLOR").map_or(false, |v| v == "0"),
        }
    }

    pub fn allows(&self, is_terminal: bool) -> bool {
        if self.no_color {
            false
        } else if self.clicolor_force {
            true
        } else {
            !self.clicolor_off && is_terminal
        }
    }
}

/// Colors only when its target stream is a terminal and the environment
/// does not say otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPalette {
    enabled: bool,
}

impl TerminalPalette {
    pub fn new(is_terminal: bool) -> Self {
        Self::with_env(is_terminal, ColorEnv::from_env())
    }

    pub fn with_env(is_terminal: bool, env: ColorEnv) -> Self {
        Self {
            enabled: env.allows(is_terminal),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Palette for TerminalPalette {
    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            AnsiPalette.paint(text, color)
        } else {
            PlainPalette.paint(text, color)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Palette for a sink of unknown kind; `Auto` treats it as not a terminal
    pub fn palette(self) -> Box<dyn Palette> {
        self.palette_for(false)
    }

    pub fn palette_for(self, is_terminal: bool) -> Box<dyn Palette> {
        match self {
            ColorMode::Auto => Box::new(TerminalPalette::new(is_terminal)),
            ColorMode::Always => Box::new(AnsiPalette),
            ColorMode::Never => Box::new(PlainPalette),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_palette() {
        assert_eq!(AnsiPalette.paint("info", Color::Green), "\x1b[32minfo\x1b[0m");
        assert_eq!(AnsiPalette.paint("•", Color::Cyan), "\x1b[36m•\x1b[0m");
        assert_eq!(AnsiPalette.paint("warning", Color::Yellow), "\x1b[33mwarning\x1b[0m");
        assert_eq!(AnsiPalette.paint("error", Color::Red), "\x1b[31merror\x1b[0m");
    }

    #[test]
    fn test_plain_palette() {
        assert_eq!(PlainPalette.paint("info", Color::Green), "info");
    }

    #[test]
    fn test_color_mode_never_is_plain() {
        let palette = ColorMode::Never.palette();
        assert_eq!(palette.paint("app", Color::Green), "app");
    }

    #[test]
    fn test_terminal_palette_follows_stream() {
        let env = ColorEnv::default();

        let tty = TerminalPalette::with_env(true, env);
        assert!(tty.is_enabled());
        assert_eq!(tty.paint("info", Color::Green), "\x1b[32minfo\x1b[0m");

        let redirected = TerminalPalette::with_env(false, env);
        assert!(!redirected.is_enabled());
        assert_eq!(redirected.paint("info", Color::Green), "info");
    }

    #[test]
    fn test_color_env_precedence() {
        let no_color = ColorEnv {
            no_color: true,
            clicolor_force: true,
            ..ColorEnv::default()
        };
        assert!(!no_color.allows(true));

        let forced = ColorEnv {
            clicolor_force: true,
            clicolor_off: true,
            ..ColorEnv::default()
        };
        assert!(forced.allows(false));

        let off = ColorEnv {
            clicolor_off: true,
            ..ColorEnv::default()
        };
        assert!(!off.allows(true));
    }
}
