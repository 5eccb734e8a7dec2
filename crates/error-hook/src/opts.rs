//! Command line options for setting up a [`Logger`] and its error hook

use crate::formatter::{Formatter, JsonFormatter, TextFormatter};
use crate::hook::{ErrorHook, WriteCallback};
use crate::level::Level;
use crate::logger::Logger;
use atty::Stream;
use fern::Dispatch;
use log::{LevelFilter, SetLoggerError};
use std::io::Write;

/// Provides helpful logging args for clap clis
#[derive(Debug, clap::Args, Clone)]
#[clap(next_help_heading = "Log Level")]
pub struct LoggingOpts {
    /// Only display error level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["warn", "info", "debug", "trace"]))]
    #[clap(display_order = 1)]
    #[clap(global = true)]
    error: bool,

    /// Display warning and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "info", "debug", "trace"]))]
    #[clap(display_order = 2)]
    #[clap(global = true)]
    warn: bool,

    /// Display info and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "warn", "debug", "trace"]))]
    #[clap(display_order = 3)]
    #[clap(global = true)]
    info: bool,

    /// Display debug and above level log messages
    #[clap(long, short)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "trace"]))]
    #[clap(display_order = 4)]
    #[clap(global = true)]
    debug: bool,

    /// Display trace and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "debug"]))]
    #[clap(display_order = 5)]
    #[clap(global = true)]
    trace: bool,

    /// Show the source of a logging statement
    #[clap(long)]
    #[clap(help_heading = "Logging Settings")]
    #[clap(global = true)]
    pub show_source: bool,

    /// Outputs everything as json
    #[clap(long)]
    #[clap(help_heading = "Logging Settings")]
    #[clap(global = true)]
    pub json: bool,

    /// The console output mode.
    #[clap(long, value_enum, default_value_t = ConsoleMode::Auto)]
    #[clap(help_heading = "Logging Settings")]
    #[clap(global = true)]
    pub console: ConsoleMode,

    /// A level the error hook fires for. Defaults to error and fatal.
    #[clap(long = "hook-level", value_enum)]
    #[clap(help_heading = "Error Hook")]
    #[clap(global = true)]
    pub hook_levels: Vec<Level>,

    /// Stop writing to the console once the error hook is installed
    #[clap(long)]
    #[clap(help_heading = "Error Hook")]
    #[clap(global = true)]
    pub discard_output: bool,
}

impl Default for LoggingOpts {
    fn default() -> Self {
        Self {
            error: false,
            warn: false,
            info: false,
            debug: false,
            trace: false,
            show_source: false,
            json: false,
            console: ConsoleMode::Plain,
            hook_levels: vec![],
            discard_output: false,
        }
    }
}

#[derive(Debug, Copy, Clone, clap::ValueEnum, Eq, PartialEq)]
#[repr(u8)]
pub enum ConsoleMode {
    Auto,
    Rich,
    Plain,
}

impl ConsoleMode {
    pub fn resolve(self) -> Self {
        match &self {
            ConsoleMode::Auto => {
                if atty::is(Stream::Stderr) {
                    ConsoleMode::Rich
                } else {
                    ConsoleMode::Plain
                }
            }
            ConsoleMode::Rich => self,
            ConsoleMode::Plain => self,
        }
    }
}

impl LoggingOpts {
    /// Gets the least severe level to emit
    pub fn level(&self) -> Level {
        if self.error {
            Level::Error
        } else if self.warn {
            Level::Warn
        } else if self.info {
            Level::Info
        } else if self.debug {
            Level::Debug
        } else if self.trace {
            Level::Trace
        } else {
            Level::Info
        }
    }

    /// Gets the log level
    pub fn log_level_filter(&self) -> LevelFilter {
        self.level().to_level_filter()
    }

    /// Whether the console output should be colored
    pub fn rich(&self) -> bool {
        self.console.resolve() == ConsoleMode::Rich
    }

    /// The formatter entries are written with
    pub fn formatter(&self) -> Box<dyn Formatter> {
        if self.json {
            Box::new(JsonFormatter::default())
        } else {
            Box::new(TextFormatter {
                show_source: self.show_source,
                timestamp: true,
                colors: self.rich(),
            })
        }
    }

    /// Creates a logger configured by these options, writing to stderr
    pub fn create_logger(&self) -> Logger {
        if !self.rich() {
            colored::control::set_override(false);
        }
        let logger = Logger::new();
        logger.set_level(self.level());
        logger.set_formatter(self.formatter());
        logger
    }

    /// Creates a dispatch that sends records at the configured level to the logger
    pub fn create_dispatch(&self, logger: &Logger) -> Dispatch {
        Dispatch::new()
            .level(self.log_level_filter())
            .chain(Box::new(logger.clone()) as Box<dyn log::Log>)
    }

    /// Creates a logger and installs it as the global logger
    pub fn init_root_logger(&self) -> Result<Logger, SetLoggerError> {
        let logger = self.create_logger();
        self.create_dispatch(&logger).apply()?;
        Ok(logger)
    }

    /// Creates an error hook for the logger using the hook options.
    ///
    /// The hook is not registered; pass it to [`Logger::add_hook`].
    pub fn error_hook<W: Write + Send + 'static>(
        &self,
        logger: &Logger,
        writer: W,
        on_after_write: Option<WriteCallback>,
    ) -> ErrorHook {
        let formatter: Box<dyn Formatter> = if self.json {
            Box::new(JsonFormatter::default())
        } else {
            Box::new(TextFormatter {
                show_source: true,
                timestamp: true,
                colors: false,
            })
        };
        ErrorHook::init(
            logger.out(),
            !self.discard_output,
            writer,
            Some(self.hook_levels.clone()),
            on_after_write,
            formatter,
        )
    }
}
