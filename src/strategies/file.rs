//! File strategy implementation

use crate::core::{LogStrategy, LoggerError, Result, TimestampFormat, DEFAULT_LOG_FILE};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends `[File] <timestamp>: <message>` lines to a file.
///
/// The file is opened in append mode, written and closed on every call, so no
/// handle outlives a `log` call.
pub struct FileStrategy {
    path: PathBuf,
    timestamp_format: TimestampFormat,
}

impl FileStrategy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this strategy
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use strategy_logger::strategies::FileStrategy;
    /// use strategy_logger::TimestampFormat;
    ///
    /// let strategy = FileStrategy::new("/var/log/app.log")
    ///     .with_timestamp_format(TimestampFormat::Iso8601);
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

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for FileStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogStrategy for FileStrategy {
    fn log(&mut self, message: &str) -> Result<()> {
        let line = format!("[File] {}: {}\n", self.timestamp_format.now()?, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::io_operation("opening log file", self.path_str(), e))?;

        // Held until `file` is closed at the end of this call
        #[cfg(feature = "file")]
        fs2::FileExt::lock_exclusive(&file)
            .map_err(|e| LoggerError::io_operation("locking log file", self.path_str(), e))?;

        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log file", self.path_str(), e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_path() {
        assert_eq!(FileStrategy::default().path(), Path::new("log.txt"));
    }

    #[test]
    fn test_appends_in_call_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("ordered.log");
        let mut strategy = FileStrategy::new(&log_file).with_custom_timestamp("TS");

        strategy.log("one").unwrap();
        strategy.log("two").unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert_eq!(content, "[File] TS: one\n[File] TS: two\n");
    }

    #[test]
    fn test_keeps_existing_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("existing.log");
        std::fs::write(&log_file, "previous line\n").unwrap();

        let mut strategy = FileStrategy::new(&log_file);
        strategy.log("appended").unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.starts_with("previous line\n[File] "));
        assert!(content.ends_with(": appended\n"));
    }

    #[test]
    fn test_unopenable_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("missing").join("log.txt");
        let mut strategy = FileStrategy::new(&log_file);

        let err = strategy.log("lost").unwrap_err();
        match err {
            LoggerError::IoOperation { operation, path, .. } => {
                assert_eq!(operation, "opening log file");
                assert!(path.ends_with("log.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!log_file.exists());
    }
}
