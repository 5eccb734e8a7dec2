//! Turns entries into the bytes written by hooks and the logger

use crate::entry::Entry;
use crate::error::FormatError;

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Converts one entry into a byte sequence.
///
/// Implemented for any `Fn(&Entry) -> Result<Vec<u8>, FormatError>`.
pub trait Formatter: Send + Sync {
    /// Formats the entry
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&Entry) -> Result<Vec<u8>, FormatError> + Send + Sync,
{
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, FormatError> {
        (self)(entry)
    }
}

/// Emits the message of the entry as is, without a trailing newline
#[derive(Debug, Default, Copy, Clone)]
pub struct MessageFormatter;

impl Formatter for MessageFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>, FormatError> {
        Ok(entry.message.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn message_only() {
        let entry = Entry::new(Level::Error, "boom");
        assert_eq!(MessageFormatter.format(&entry).unwrap(), b"boom");
    }

    #[test]
    fn closures_are_formatters() {
        let formatter = |entry: &Entry| -> Result<Vec<u8>, FormatError> {
            Ok(format!("<{}>", entry.level).into_bytes())
        };
        let boxed: Box<dyn Formatter> = Box::new(formatter);
        let entry = Entry::new(Level::Warn, "ignored");
        assert_eq!(boxed.format(&entry).unwrap(), b"<warn>");
    }
}
