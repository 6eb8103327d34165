//! Injected logging collaborator
//!
//! Components receive an `Arc<dyn Logger>` instead of reaching for a
//! process-wide logger. `StderrLogger` is used by the binary, `MemoryLogger`
//! by tests that assert on what was logged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warning => write!(f, "Warning"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Writes `[car-deals] Level: message` lines to stderr
pub struct StderrLogger {
    min_level: LogLevel,
}

impl StderrLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level >= self.min_level {
            eprintln!("{}", format_line(level, message));
        }
    }
}

/// Records every line in memory
#[derive(Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Recorded messages at exactly `level`
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

fn format_line(level: LogLevel, message: &str) -> String {
    format!("[car-deals] {}: {}", level, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_deserialize_lowercase() {
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, LogLevel::Warning);
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(LogLevel::Warning, "No deals found"),
            "[car-deals] Warning: No deals found"
        );
    }

    #[test]
    fn test_memory_logger_records_helpers() {
        let logger = MemoryLogger::new();
        logger.info("one");
        logger.warn("two");
        logger.error("three");
        assert_eq!(
            logger.lines(),
            vec![
                (LogLevel::Info, "one".to_string()),
                (LogLevel::Warning, "two".to_string()),
                (LogLevel::Error, "three".to_string()),
            ]
        );
        assert_eq!(logger.messages_at(LogLevel::Error), vec!["three"]);
    }
}
