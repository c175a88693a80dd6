//! Timestamp formatting utilities
//!
//! Console and file strategies stamp each line with the current local time.
//! The format is configurable; the default is a human-readable local
//! date-time with microseconds.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options for strategy output
///
/// # Examples
///
/// ```
/// use strategy_logger::core::TimestampFormat;
///
/// let format = TimestampFormat::default();
/// let timestamp = format.now()?;
/// // Output: "2025-01-08 10:30:45.123456"
/// assert!(timestamp.contains(' '));
/// # Ok::<(), strategy_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date-time with microseconds: `2025-01-08 10:30:45.123456`
    #[default]
    Local,

    /// ISO 8601 local time with milliseconds: `2025-01-08T10:30:45.123`
    Iso8601,

    /// RFC 3339 with the local offset: `2025-01-08T10:30:45.123456+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// ```
    /// use strategy_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format `datetime`, failing if a custom format string is not valid strftime
    pub fn format(&self, datetime: &DateTime<Local>) -> Result<String> {
        let pattern = match self {
            TimestampFormat::Local => "%Y-%m-%d %H:%M:%S%.6f",
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3f",
            TimestampFormat::Rfc3339 => return Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => return Ok(datetime.timestamp().to_string()),
            TimestampFormat::Custom(format_str) => format_str.as_str(),
        };

        let mut output = String::new();
        write!(output, "{}", datetime.format(pattern)).map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid strftime format '{}'", pattern))
        })?;
        Ok(output)
    }

    /// Format the current local time
    pub fn now(&self) -> Result<String> {
        self.format(&Local::now())
    }
}
