//! A log hook that sends error level entries to a writer of your choosing.
//!
//! An [`ErrorHook`] is attached to a [`Logger`]. Whenever the logger emits an entry at one of
//! the hook's levels (error and fatal unless told otherwise), the hook formats the entry and
//! writes it to its own writer, then reports the outcome to an optional callback. Creating the
//! hook can also silence the logger's default output, so only the hooked entries remain.
//!
//! ```no_run
//! use error_hook::{ErrorHook, Logger, MessageFormatter};
//! use std::sync::Arc;
//!
//! let logger = Logger::new();
//! let errors = std::fs::File::create("errors.log").unwrap();
//! let hook = ErrorHook::init(logger.out(), false, errors, None, None, Box::new(MessageFormatter));
//! logger.add_hook(Arc::new(hook));
//! log::set_boxed_logger(Box::new(logger.clone())).unwrap();
//! log::set_max_level(log::LevelFilter::Info);
//!
//! log::error!("only this ends up in errors.log");
//! ```

pub mod entry;
pub mod error;
pub mod formatter;
pub mod hook;
pub mod level;
pub mod logger;
pub mod opts;
pub mod output;

#[cfg(test)]
mod test_support;

pub use entry::Entry;
pub use error::{FormatError, HookError};
pub use formatter::{Formatter, JsonFormatter, MessageFormatter, TextFormatter};
pub use hook::{ErrorHook, Hook, LevelHooks, WriteCallback};
pub use level::Level;
pub use logger::Logger;
pub use opts::{ConsoleMode, LoggingOpts};
pub use output::SharedOutput;
