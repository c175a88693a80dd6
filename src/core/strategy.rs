//! Strategy trait for log output destinations

use super::error::Result;

/// A single way of emitting a log message.
///
/// Implementations receive the message text verbatim and decide where it goes.
/// A strategy is owned by exactly one [`Logger`](crate::Logger) at a time.
pub trait LogStrategy: Send {
    fn log(&mut self, message: &str) -> Result<()>;

    fn name(&self) -> &str;

    /// Flush any buffered output. Strategies that write through on every call
    /// have nothing to do here.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
