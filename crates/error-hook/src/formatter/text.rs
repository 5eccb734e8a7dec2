use crate::entry::Entry;
use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::level::Level;
use colored::Colorize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use time::format_description::FormatItem;
use time::macros::format_description;

static DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second].[subsecond digits:4]");

/// Formats entries as a single human readable line.
///
/// A fully enabled line looks like
/// `[2022/08/01 12:00:00.0000] (app :: net.rs:42) error: connection reset`
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Show the crate, file and line an entry came from when known
    pub show_source: bool,
    /// Prefix each line with the time of the entry
    pub timestamp: bool,
    /// Color the level and message with ansi escapes
    pub colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            show_source: false,
            timestamp: true,
            colors: false,
        }
    }
}

impl TextFormatter {
    fn format_prefix(&self, entry: &Entry) -> Result<String, FormatError> {
        let mut prefix = String::new();
        if self.timestamp {
            prefix.push_str(&format!("[{}] ", entry.time.format(DATE_TIME_FORMAT)?));
        }
        if self.show_source {
            match source(entry) {
                Some(source) => {
                    let source = if self.colors {
                        source.italic().to_string()
                    } else {
                        source
                    };
                    prefix.push_str(&source);
                    prefix.push(' ');
                }
                None => prefix.push_str("(<unknown source>) "),
            }
        }
        Ok(prefix)
    }

    fn level_string(&self, level: Level) -> String {
        let level_string = level.to_string();
        if !self.colors {
            return level_string;
        }
        match level {
            Level::Panic | Level::Fatal => level_string.red().bold().to_string(),
            Level::Error => level_string.red().to_string(),
            Level::Warn => level_string.yellow().to_string(),
            Level::Info => level_string.green().to_string(),
            Level::Debug => level_string.blue().to_string(),
            Level::Trace => level_string.bright_black().to_string(),
        }
    }

    fn message_string(&self, entry: &Entry) -> String {
        if !self.colors {
            return entry.message.clone();
        }
        let message = entry.message.as_str();
        match entry.level {
            Level::Panic | Level::Fatal | Level::Error => message.red().to_string(),
            Level::Warn => message.yellow().to_string(),
            Level::Info | Level::Debug => message.to_string(),
            Level::Trace => message.bright_blue().to_string(),
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, FormatError> {
        let line = format!(
            "{}{}: {}\n",
            self.format_prefix(entry)?,
            self.level_string(entry.level),
            self.message_string(entry)
        );
        Ok(line.into_bytes())
    }
}

/// `(crate :: path/under/src.rs:line)`, if both the module path and file are known
fn source(entry: &Entry) -> Option<String> {
    let module = entry.module_path.as_deref()?;
    let file = entry.file.as_deref()?;
    let line = entry.line.map(|i| format!(":{}", i)).unwrap_or_default();
    let crate_name = module.split("::").next().unwrap_or(module);
    let mut source: PathBuf = Path::new(file)
        .iter()
        .skip_while(|&p| p != OsStr::new("src"))
        .skip(1)
        .collect();
    if source.as_os_str().is_empty() {
        source = PathBuf::from(file);
    }

    Some(format!(
        "({crate_name} :: {source}{line})",
        source = source.to_string_lossy()
    ))
}
