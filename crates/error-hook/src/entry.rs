//! Log entries passed to formatters and hooks

use crate::level::Level;
use log::Record;
use std::fmt;
use time::OffsetDateTime;

/// An owned snapshot of a single log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The severity of the event
    pub level: Level,
    /// When the entry was created, in UTC
    pub time: OffsetDateTime,
    /// The rendered message
    pub message: String,
    /// The target of the event, usually the module path of the call site
    pub target: String,
    pub module_path: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl Entry {
    /// Creates a new entry at the current time with no source information
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            time: OffsetDateTime::now_utc(),
            message: message.into(),
            target: String::new(),
            module_path: None,
            file: None,
            line: None,
        }
    }

    /// Sets the target of this entry
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the time of this entry
    pub fn with_time(mut self, time: OffsetDateTime) -> Self {
        self.time = time;
        self
    }

    /// Creates an entry from already formatted arguments
    pub fn from_args(level: Level, target: &str, args: &fmt::Arguments) -> Self {
        Self::new(level, args.to_string()).with_target(target)
    }
}

impl From<&Record<'_>> for Entry {
    fn from(record: &Record<'_>) -> Self {
        Self {
            level: record.level().into(),
            time: OffsetDateTime::now_utc(),
            message: record.args().to_string(),
            target: record.target().to_string(),
            module_path: record.module_path().map(str::to_string),
            file: record.file().map(str::to_string),
            line: record.line(),
        }
    }
}
