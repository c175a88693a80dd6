//! Factory configuration

use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file written by the file strategy, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Settings applied to every strategy a [`StrategyFactory`](crate::StrategyFactory) builds
///
/// # Examples
///
/// ```
/// use strategy_logger::core::{FactoryConfig, TimestampFormat};
///
/// let config = FactoryConfig::new()
///     .with_file_path("/tmp/app.log")
///     .with_timestamp_format(TimestampFormat::Iso8601);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Target path of the file strategy
    pub file_path: PathBuf,
    /// Timestamp format of the console and file strategies
    pub timestamp_format: TimestampFormat,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl FactoryConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible format string for timestamps
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }
}
