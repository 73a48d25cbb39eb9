//! Log level definitions
//!
//! `LogLevel` is the ranked set used for filtering. `LevelName` is the wider
//! set of names a caller can log at; `success` and `wait` carry their own
//! style but filter at `info` rank.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Numeric rank used for threshold comparison
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::unknown_level(s)),
        }
    }
}

/// Every name a message can be logged at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelName {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Success,
    Wait,
}

impl LevelName {
    pub const ALL: [LevelName; 7] = [
        LevelName::Debug,
        LevelName::Info,
        LevelName::Warn,
        LevelName::Error,
        LevelName::Fatal,
        LevelName::Success,
        LevelName::Wait,
    ];

    /// The ranked level this name filters at
    pub const fn rank_level(self) -> LogLevel {
        match self {
            LevelName::Debug => LogLevel::Debug,
            LevelName::Info | LevelName::Success | LevelName::Wait => LogLevel::Info,
            LevelName::Warn => LogLevel::Warn,
            LevelName::Error => LogLevel::Error,
            LevelName::Fatal => LogLevel::Fatal,
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank_level().rank()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LevelName::Debug => "debug",
            LevelName::Info => "info",
            LevelName::Warn => "warn",
            LevelName::Error => "error",
            LevelName::Fatal => "fatal",
            LevelName::Success => "success",
            LevelName::Wait => "wait",
        }
    }
}

impl From<LogLevel> for LevelName {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelName::Debug,
            LogLevel::Info => LevelName::Info,
            LogLevel::Warn => LevelName::Warn,
            LogLevel::Error => LevelName::Error,
            LogLevel::Fatal => LevelName::Fatal,
        }
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LevelName {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "success" => Ok(LevelName::Success),
            "wait" | "waiting" => Ok(LevelName::Wait),
            _ => s.parse::<LogLevel>().map(LevelName::from),
        }
    }
}

/// Rank of a level given by name; fails for names outside the ranked set
pub fn rank(name: &str) -> Result<u8> {
    name.parse::<LogLevel>().map(LogLevel::rank)
}

/// Whether a message at `candidate` passes a logger configured at `configured`
#[inline]
pub fn is_enabled(configured: LogLevel, candidate: LevelName) -> bool {
    candidate.rank() >= configured.rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(LogLevel::Debug.rank() < LogLevel::Info.rank());
        assert!(LogLevel::Info.rank() < LogLevel::Warn.rank());
        assert!(LogLevel::Warn.rank() < LogLevel::Error.rank());
        assert!(LogLevel::Error.rank() < LogLevel::Fatal.rank());
    }

    #[test]
    fn test_aliases_filter_at_info() {
        assert_eq!(LevelName::Success.rank_level(), LogLevel::Info);
        assert_eq!(LevelName::Wait.rank_level(), LogLevel::Info);
        assert!(is_enabled(LogLevel::Info, LevelName::Success));
        assert!(!is_enabled(LogLevel::Warn, LevelName::Wait));
    }

    #[test]
    fn test_is_enabled() {
        assert!(is_enabled(LogLevel::Debug, LevelName::Debug));
        assert!(!is_enabled(LogLevel::Info, LevelName::Debug));
        assert!(is_enabled(LogLevel::Info, LevelName::Fatal));
        assert!(!is_enabled(LogLevel::Fatal, LevelName::Error));
    }

    #[test]
    fn test_rank_by_name() {
        assert_eq!(rank("debug").unwrap(), 0);
        assert_eq!(rank("WARNING").unwrap(), 2);
        assert!(matches!(rank("success"), Err(LoggerError::UnknownLevel { .. })));
        assert!(matches!(rank("verbose"), Err(LoggerError::UnknownLevel { .. })));
    }

    #[test]
    fn test_level_name_parse() {
        assert_eq!("success".parse::<LevelName>().unwrap(), LevelName::Success);
        assert_eq!("waiting".parse::<LevelName>().unwrap(), LevelName::Wait);
        assert_eq!("Error".parse::<LevelName>().unwrap(), LevelName::Error);
        assert!("trace".parse::<LevelName>().is_err());
    }

    #[test]
    fn test_default_level() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
