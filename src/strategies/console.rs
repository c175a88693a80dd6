//! Console strategy implementation

use crate::core::{LogStrategy, Result, TimestampFormat};
use std::io::Write;

/// Writes `[Console] <timestamp>: <message>` lines to stdout.
pub struct ConsoleStrategy {
    writer: Box<dyn Write + Send>,
    timestamp_format: TimestampFormat,
}

impl ConsoleStrategy {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    /// Write lines to `writer` instead of stdout
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this strategy
    ///
    /// # Examples
    ///
    /// ```
    /// use strategy_logger::strategies::ConsoleStrategy;
    /// use strategy_logger::TimestampFormat;
    ///
    /// let strategy = ConsoleStrategy::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    fn format_line(&self, message: &str) -> Result<String> {
        Ok(format!("[Console] {}: {}", self.timestamp_format.now()?, message))
    }
}

impl Default for ConsoleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStrategy for ConsoleStrategy {
    fn log(&mut self, message: &str) -> Result<()> {
        let line = self.format_line(message)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
