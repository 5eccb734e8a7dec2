use crate::entry::Entry;
use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::level::Level;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

/// Formats each entry as a single json object followed by a newline
#[derive(Debug, Default, Clone)]
pub struct JsonFormatter {
    /// Pretty print the object over multiple lines
    pub pretty: bool,
}

#[derive(Debug, Serialize)]
struct JsonMessageInfo<'a> {
    level: Level,
    time: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    target: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl<'a> JsonMessageInfo<'a> {
    fn new(entry: &'a Entry) -> Result<Self, FormatError> {
        let source = entry.file.as_ref().map(|file| match entry.line {
            Some(line) => format!("{file}:{line}"),
            None => file.clone(),
        });
        Ok(Self {
            level: entry.level,
            time: entry.time.format(&Rfc3339)?,
            target: &entry.target,
            message: &entry.message,
            source,
        })
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, FormatError> {
        let info = JsonMessageInfo::new(entry)?;
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(&info)?
        } else {
            serde_json::to_vec(&info)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}
