//! Mock database strategy
//!
//! No connection is made and nothing is persisted. Each message is echoed to
//! stdout as `[Database] (Logged to DB): <message>`.

use crate::core::{LogStrategy, Result};
use std::io::Write;

pub struct DatabaseStrategy {
    writer: Box<dyn Write + Send>,
}

impl DatabaseStrategy {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl Default for DatabaseStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStrategy for DatabaseStrategy {
    fn log(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "[Database] (Logged to DB): {}", message)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "database"
    }
}
