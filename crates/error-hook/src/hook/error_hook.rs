use crate::entry::Entry;
use crate::error::HookError;
use crate::formatter::Formatter;
use crate::hook::Hook;
use crate::level::Level;
use crate::output::SharedOutput;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::io;
use std::io::Write;

/// Called after every write attempt with the number of bytes written and the write error, if
/// there was one.
pub type WriteCallback = Box<dyn Fn(usize, Option<&io::Error>) + Send + Sync>;

/// The levels an [`ErrorHook`] reacts to when none are given
pub const DEFAULT_LEVELS: [Level; 2] = [Level::Error, Level::Fatal];

/// Writes entries of error levels to a separate writer.
pub struct ErrorHook {
    /// Whether the default output of the logger was left alone when this hook was created
    pub keep_output: bool,
    pub writer: Mutex<Box<dyn Write + Send>>,
    pub log_levels: Vec<Level>,
    pub formatter: Box<dyn Formatter>,
    pub on_after_write: Option<WriteCallback>,
}

impl ErrorHook {
    /// Creates a new error hook.
    ///
    /// Unless `keep_output` is set, `default_output` is switched to discard everything written
    /// to it. When `levels` is `None` or empty, the hook fires for [`DEFAULT_LEVELS`].
    pub fn init<W: Write + Send + 'static>(
        default_output: &SharedOutput,
        keep_output: bool,
        writer: W,
        levels: Option<Vec<Level>>,
        on_after_write: Option<WriteCallback>,
        formatter: Box<dyn Formatter>,
    ) -> Self {
        if !keep_output {
            default_output.discard();
        }
        let log_levels = match levels {
            Some(levels) if !levels.is_empty() => levels,
            _ => DEFAULT_LEVELS.to_vec(),
        };
        Self {
            keep_output,
            writer: Mutex::new(Box::new(writer)),
            log_levels,
            formatter,
            on_after_write,
        }
    }

    /// Makes a single write attempt. A short write is reported as the writer returned it.
    fn write_once(&self, bytes: &[u8]) -> (usize, io::Result<()>) {
        let mut writer = self.writer.lock();
        match writer.write(bytes) {
            Ok(written) => (written, Ok(())),
            Err(e) => (0, Err(e)),
        }
    }
}

impl Hook for ErrorHook {
    fn levels(&self) -> &[Level] {
        &self.log_levels
    }

    fn fire(&self, entry: &Entry) -> Result<(), HookError> {
        let formatted = self.formatter.format(entry)?;
        let (written, result) = self.write_once(&formatted);
        if let Some(on_after_write) = &self.on_after_write {
            on_after_write(written, result.as_ref().err());
        }
        result.map_err(HookError::from)
    }
}

impl Debug for ErrorHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorHook")
            .field("keep_output", &self.keep_output)
            .field("log_levels", &self.log_levels)
            .field("on_after_write", &self.on_after_write.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Buffer;
    use crate::error::FormatError;
    use crate::formatter::MessageFormatter;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Accepts at most `limit` bytes per write
    struct Short {
        limit: usize,
    }

    impl Write for Short {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len().min(self.limit))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn hook_with<W: Write + Send + 'static>(writer: W, levels: Option<Vec<Level>>) -> ErrorHook {
        ErrorHook::init(
            &SharedOutput::new(io::sink()),
            true,
            writer,
            levels,
            None,
            Box::new(MessageFormatter),
        )
    }

    #[test]
    fn absent_or_empty_levels_default() {
        assert_eq!(hook_with(io::sink(), None).levels(), DEFAULT_LEVELS);
        assert_eq!(hook_with(io::sink(), Some(vec![])).levels(), DEFAULT_LEVELS);
    }

    #[test]
    fn given_levels_are_kept() {
        let levels = vec![Level::Warn, Level::Panic];
        let hook = hook_with(io::sink(), Some(levels.clone()));
        assert_eq!(hook.levels(), levels.as_slice());
    }

    #[test]
    fn keep_output_decides_discard() {
        let output = SharedOutput::new(Buffer::default());
        let formatter = || -> Box<dyn Formatter> { Box::new(MessageFormatter) };
        let _hook = ErrorHook::init(&output, true, io::sink(), None, None, formatter());
        assert!(!output.is_discarded());

        let _hook = ErrorHook::init(&output, false, io::sink(), None, None, formatter());
        assert!(output.is_discarded());
    }

    #[test]
    fn writes_formatted_entry() {
        let buffer = Buffer::default();
        let hook = hook_with(buffer.clone(), None);
        hook.fire(&Entry::new(Level::Error, "boom")).unwrap();
        assert_eq!(buffer.bytes(), b"boom");
    }

    #[test]
    fn short_write_passes_through() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = calls.clone();
        let hook = ErrorHook::init(
            &SharedOutput::new(io::sink()),
            true,
            Short { limit: 2 },
            None,
            Some(Box::new(move |n: usize, err: Option<&io::Error>| {
                recorded.lock().push((n, err.map(io::Error::kind)));
            })),
            Box::new(MessageFormatter),
        );

        hook.fire(&Entry::new(Level::Error, "boom")).unwrap();
        assert_eq!(*calls.lock(), vec![(2, None)]);
    }

    #[test]
    fn format_failure_skips_write_and_callback() {
        let buffer = Buffer::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let hook = ErrorHook::init(
            &SharedOutput::new(io::sink()),
            true,
            buffer.clone(),
            None,
            Some(Box::new(move |_: usize, _: Option<&io::Error>| {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            Box::new(|_: &Entry| -> Result<Vec<u8>, FormatError> {
                Err(FormatError::custom("unformattable"))
            }),
        );

        let result = hook.fire(&Entry::new(Level::Error, "boom"));
        assert!(matches!(result, Err(HookError::Format(FormatError::Custom(_)))));
        assert!(buffer.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
