//! Severity levels for log entries

use log::LevelFilter;

/// The severity of a log entry, most severe first.
///
/// The ordering follows the declaration order, so `Level::Panic < Level::Trace`. A level is
/// enabled for a threshold when it is less than or equal to that threshold.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// The highest severity. Nothing emitted through the `log` facade has this level.
    Panic,
    /// An entry logged right before the application gives up.
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// Whether this level would be emitted by something configured with the given threshold
    pub fn enabled_at(self, threshold: Level) -> bool {
        self <= threshold
    }

    /// The closest `log` filter that lets this level through.
    ///
    /// `log` has no ranks above error, so panic and fatal map to [`LevelFilter::Error`].
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Level::Panic | Level::Fatal | Level::Error => LevelFilter::Error,
            Level::Warn => LevelFilter::Warn,
            Level::Info => LevelFilter::Info,
            Level::Debug => LevelFilter::Debug,
            Level::Trace => LevelFilter::Trace,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn severity_order() {
        let levels = Level::iter().collect::<Vec<_>>();
        assert_eq!(levels.first(), Some(&Level::Panic));
        assert_eq!(levels.last(), Some(&Level::Trace));
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Level::from_str("error").unwrap(), Level::Error);
        assert_eq!(Level::from_str("FATAL").unwrap(), Level::Fatal);
        assert_eq!(Level::from_str("Warn").unwrap(), Level::Warn);
        assert!(Level::from_str("verbose").is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Level::Fatal.to_string(), "fatal");
        assert_eq!(Level::Info.to_string(), "info");
    }

    #[test]
    fn enabled_at_threshold() {
        assert!(Level::Error.enabled_at(Level::Info));
        assert!(Level::Info.enabled_at(Level::Info));
        assert!(!Level::Debug.enabled_at(Level::Info));
        assert!(Level::Fatal.enabled_at(Level::Error));
    }

    #[test]
    fn log_levels_map_across() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
        assert_eq!(Level::Fatal.to_level_filter(), LevelFilter::Error);
        assert_eq!(Level::Debug.to_level_filter(), LevelFilter::Debug);
    }
}
