//! The default destination of a [`Logger`](crate::Logger)

use parking_lot::Mutex;
use std::fmt::{Debug, Formatter};
use std::io;
use std::io::Write;
use std::sync::Arc;

struct OutputState {
    writer: Box<dyn Write + Send>,
    discarding: bool,
}

/// A shared, swappable writer.
///
/// Every clone refers to the same underlying writer, so replacing it through one handle is
/// visible through all of them.
#[derive(Clone)]
pub struct SharedOutput {
    state: Arc<Mutex<OutputState>>,
}

impl SharedOutput {
    /// Creates a new output writing to the given writer
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            state: Arc::new(Mutex::new(OutputState {
                writer: Box::new(writer),
                discarding: false,
            })),
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Replaces the writer
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        let mut state = self.state.lock();
        state.writer = Box::new(writer);
        state.discarding = false;
    }

    /// Replaces the writer with one that drops everything written to it
    pub fn discard(&self) {
        let mut state = self.state.lock();
        state.writer = Box::new(io::sink());
        state.discarding = true;
    }

    /// Whether [`discard`](Self::discard) was the last change made to this output
    pub fn is_discarded(&self) -> bool {
        self.state.lock().discarding
    }
}

impl Default for SharedOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Debug for SharedOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedOutput")
            .field("discarding", &self.is_discarded())
            .finish_non_exhaustive()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.lock().writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.state.lock().writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Buffer;

    #[test]
    fn clones_share_the_writer() {
        let buffer = Buffer::default();
        let output = SharedOutput::new(buffer.clone());
        let mut clone = output.clone();

        clone.write_all(b"hello").unwrap();
        assert_eq!(buffer.bytes(), b"hello");
    }

    #[test]
    fn discard_drops_writes() {
        let buffer = Buffer::default();
        let mut output = SharedOutput::new(buffer.clone());
        assert!(!output.is_discarded());

        output.clone().discard();
        assert!(output.is_discarded());
        assert_eq!(output.write(b"gone").unwrap(), 4);
        assert!(buffer.is_empty());

        output.set_output(buffer.clone());
        assert!(!output.is_discarded());
        output.write_all(b"back").unwrap();
        assert_eq!(buffer.bytes(), b"back");
    }
}
