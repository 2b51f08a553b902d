//! Logging configuration and utilities for sylva.
//!
//! The library crates never log. Binaries build a [`Logger`] from a
//! [`LoggingConfig`] and report progress through it; tests capture entries
//! with a [`LogCollector`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

/// Log level for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }

    /// Check if this level should log messages at the given level
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.rank() >= level.rank()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        };
        f.pad(name)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level to output
    #[serde(default)]
    pub level: LogLevel,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
    /// Prefix plain lines with an RFC 3339 timestamp
    #[serde(default = "default_true")]
    pub timestamps: bool,
    /// Component-specific log levels
    #[serde(default)]
    pub component_levels: HashMap<String, LogLevel>,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Plain,
            timestamps: true,
            component_levels: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Set a component-specific log level
    pub fn with_component_level(mut self, component: impl Into<String>, level: LogLevel) -> Self {
        self.component_levels.insert(component.into(), level);
        self
    }

    /// Get the effective log level for a component
    pub fn effective_level(&self, component: Option<&str>) -> LogLevel {
        component
            .and_then(|comp| self.component_levels.get(comp).copied())
            .unwrap_or(self.level)
    }

    /// Check if a message at the given level should be logged
    pub fn should_log(&self, level: LogLevel, component: Option<&str>) -> bool {
        self.effective_level(component).should_log(level)
    }
}

/// A log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level,
            component: None,
            message: message.into(),
        }
    }

    /// Create a log entry with a component
    pub fn with_component(
        level: LogLevel,
        component: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            component: Some(component.into()),
            ..Self::new(level, message)
        }
    }

    /// Render the entry as a single line (no trailing newline).
    pub fn render(&self, format: LogFormat, timestamps: bool) -> String {
        match format {
            LogFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|e| format!("{{\"message\":\"unserialisable log entry: {e}\"}}")),
            LogFormat::Compact => match &self.component {
                Some(c) => format!("{} {c}: {}", &self.level.to_string()[..1], self.message),
                None => format!("{} {}", &self.level.to_string()[..1], self.message),
            },
            LogFormat::Plain => {
                let mut line = String::new();
                if timestamps {
                    line.push_str(&self.timestamp);
                    line.push(' ');
                }
                line.push_str(&format!("{:<5}", self.level));
                if let Some(c) = &self.component {
                    line.push_str(&format!(" [{c}]"));
                }
                line.push(' ');
                line.push_str(&self.message);
                line
            }
        }
    }
}

/// Log collector for capturing log entries
#[derive(Debug, Default)]
pub struct LogCollector {
    entries: Vec<LogEntry>,
}

impl LogCollector {
    /// Create a new log collector
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a log entry
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Get all collected entries
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Get entries matching a level
    pub fn filter_by_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level == level).collect()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Writes filtered, formatted entries to a sink (stderr by default).
///
/// When a collector is attached every emitted entry is also kept in memory.
#[derive(Debug)]
pub struct Logger<W: Write = io::Stderr> {
    config: LoggingConfig,
    sink: W,
    collector: Option<LogCollector>,
}

impl Logger<io::Stderr> {
    pub fn stderr(config: LoggingConfig) -> Self {
        Self::new(config, io::stderr())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(config: LoggingConfig, sink: W) -> Self {
        Self {
            config,
            sink,
            collector: None,
        }
    }

    /// Keep a copy of every emitted entry.
    pub fn with_collector(mut self) -> Self {
        self.collector = Some(LogCollector::new());
        self
    }

    pub fn collector(&self) -> Option<&LogCollector> {
        self.collector.as_ref()
    }

    /// Emit `message` if `component` is enabled at `level`. Returns whether
    /// the entry passed the filter. Sink write failures are ignored.
    pub fn log(&mut self, level: LogLevel, component: &str, message: impl Into<String>) -> bool {
        if !self.config.should_log(level, Some(component)) {
            return false;
        }
        let entry = LogEntry::with_component(level, component, message);
        let line = entry.render(self.config.format, self.config.timestamps);
        let _ = writeln!(self.sink, "{line}");
        if let Some(collector) = self.collector.as_mut() {
            collector.push(entry);
        }
        true
    }

    pub fn error(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Error, component, message)
    }

    pub fn warn(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Warn, component, message)
    }

    pub fn info(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Info, component, message)
    }

    pub fn debug(&mut self, component: &str, message: impl Into<String>) -> bool {
        self.log(LogLevel::Debug, component, message)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(level: LogLevel, component: Option<&str>, message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    #[test]
    fn log_level_ordering() {
        assert!(LogLevel::Info.should_log(LogLevel::Info));
        assert!(LogLevel::Info.should_log(LogLevel::Warn));
        assert!(LogLevel::Info.should_log(LogLevel::Error));
        assert!(!LogLevel::Info.should_log(LogLevel::Debug));
    }

    #[test]
    fn logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Plain);
        assert!(config.timestamps);
    }

    #[test]
    fn logging_config_component_levels() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Warn)
            .with_component_level("forest", LogLevel::Debug);

        assert!(!config.should_log(LogLevel::Info, None));
        assert!(!config.should_log(LogLevel::Info, Some("bst")));
        assert!(config.should_log(LogLevel::Debug, Some("forest")));
    }

    #[test]
    fn logging_config_deserialize_partial() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level":"debug"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Plain);
        assert!(config.timestamps);
    }

    #[test]
    fn log_entry_with_component() {
        let entry = LogEntry::with_component(LogLevel::Debug, "bst", "inserting");
        assert_eq!(entry.component, Some("bst".to_string()));
        assert!(!entry.timestamp.is_empty());
    }

    #[test]
    fn render_plain() {
        let entry = fixed(LogLevel::Info, Some("bst"), "inserted 10 values");
        insta::assert_snapshot!(entry.render(LogFormat::Plain, false), @"INFO  [bst] inserted 10 values");
        assert_eq!(
            entry.render(LogFormat::Plain, true),
            "2026-01-01T00:00:00+00:00 INFO  [bst] inserted 10 values"
        );
    }

    #[test]
    fn render_compact_and_json() {
        let entry = fixed(LogLevel::Warn, None, "careful");
        assert_eq!(entry.render(LogFormat::Compact, true), "W careful");
        insta::assert_snapshot!(
            entry.render(LogFormat::Json, true),
            @r#"{"timestamp":"2026-01-01T00:00:00+00:00","level":"warn","message":"careful"}"#
        );
    }

    #[test]
    fn log_collector() {
        let mut collector = LogCollector::new();

        collector.push(LogEntry::new(LogLevel::Info, "Info message"));
        collector.push(LogEntry::new(LogLevel::Error, "Error message"));
        collector.push(LogEntry::new(LogLevel::Debug, "Debug message"));

        assert_eq!(collector.entries().len(), 3);
        assert_eq!(collector.filter_by_level(LogLevel::Error).len(), 1);

        collector.clear();
        assert!(collector.entries().is_empty());
    }

    #[test]
    fn logger_filters_and_writes() {
        let config = LoggingConfig::new()
            .with_timestamps(false)
            .with_format(LogFormat::Compact);
        let mut logger = Logger::new(config, Vec::new()).with_collector();

        assert!(logger.info("forest", "parsed"));
        assert!(!logger.debug("forest", "hidden"));
        assert!(logger.error("config", "broken"));

        assert_eq!(logger.collector().unwrap().entries().len(), 2);
        let written = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(written, "I forest: parsed\nE config: broken\n");
    }
}
