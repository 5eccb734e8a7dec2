//! The logger that hooks are attached to.
//!
//! A [`Logger`] formats every enabled entry onto its default output, after firing the hooks
//! registered for the entry's level. It implements [`log::Log`], so it can be installed as the
//! global logger (see [`LoggingOpts`](crate::LoggingOpts)).

use crate::entry::Entry;
use crate::formatter::{Formatter, TextFormatter};
use crate::hook::{Hook, LevelHooks};
use crate::level::Level;
use crate::output::SharedOutput;
use log::{Log, Metadata, Record};
use parking_lot::RwLock;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::io::Write;
use std::sync::Arc;

/// A cheaply clonable logger. Clones share hooks, output, formatter and level.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    out: SharedOutput,
    hooks: RwLock<LevelHooks>,
    formatter: RwLock<Box<dyn Formatter>>,
    level: RwLock<Level>,
}

impl Logger {
    /// Creates a logger writing text to stderr at the info level
    pub fn new() -> Self {
        Self::with_output(SharedOutput::stderr())
    }

    /// Creates a logger writing text to the given output at the info level
    pub fn with_output(out: SharedOutput) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                out,
                hooks: RwLock::new(LevelHooks::new()),
                formatter: RwLock::new(Box::new(TextFormatter::default())),
                level: RwLock::new(Level::Info),
            }),
        }
    }

    /// The default output of this logger
    pub fn out(&self) -> &SharedOutput {
        &self.inner.out
    }

    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.inner.out.set_output(writer);
    }

    pub fn set_formatter(&self, formatter: Box<dyn Formatter>) {
        *self.inner.formatter.write() = formatter;
    }

    pub fn level(&self) -> Level {
        *self.inner.level.read()
    }

    /// Sets the least severe level this logger emits
    pub fn set_level(&self, level: Level) {
        *self.inner.level.write() = level;
    }

    pub fn is_level_enabled(&self, level: Level) -> bool {
        level.enabled_at(self.level())
    }

    /// Registers a hook for all of the levels it reports
    pub fn add_hook(&self, hook: Arc<dyn Hook>) {
        self.inner.hooks.write().add(hook);
    }

    /// Logs a message at any level, including the ones `log` has no macros for.
    pub fn log(&self, level: Level, target: &str, args: fmt::Arguments) {
        if self.is_level_enabled(level) {
            self.log_entry(Entry::from_args(level, target, &args));
        }
    }

    /// Fires the hooks for the entry, then writes it to the default output.
    ///
    /// Failures are reported on stderr and never stop the entry from being written.
    pub fn log_entry(&self, entry: Entry) {
        if !self.is_level_enabled(entry.level) {
            return;
        }
        self.fire_hooks(&entry);

        let formatted = self.inner.formatter.read().format(&entry);
        match formatted {
            Ok(bytes) => {
                let mut out = self.inner.out.clone();
                if let Err(e) = out.write_all(&bytes) {
                    report(format_args!("Failed to write to log: {}", e));
                }
            }
            Err(e) => report(format_args!("Failed to format entry: {}", e)),
        }
    }

    fn fire_hooks(&self, entry: &Entry) {
        // hooks may log through this logger, so no lock is held while they run
        let hooks = self.inner.hooks.read().clone();
        if let Err(e) = hooks.fire(entry.level, entry) {
            report(format_args!("Failed to fire hook: {}", e));
        }
    }
}

fn report(args: fmt::Arguments) {
    let _ = writeln!(io::stderr(), "{}", args);
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("out", &self.inner.out)
            .field("hooks", &*self.inner.hooks.read())
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_level_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.log_entry(Entry::from(record));
        }
    }

    fn flush(&self) {
        let _ = self.inner.out.clone().flush();
    }
}
