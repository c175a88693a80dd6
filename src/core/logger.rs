//! Logger context holding the active output strategy

use super::{error::Result, metrics::LoggerMetrics, strategy::LogStrategy};
use parking_lot::Mutex;

/// Delegates every message to exactly one [`LogStrategy`].
///
/// The strategy sits behind a mutex, so a `Logger` can be shared between
/// threads and `log` / `set_strategy` both take `&self`. A `log` call runs to
/// completion against the strategy that was active when it took the lock.
///
/// # Example
///
/// ```
/// use strategy_logger::prelude::*;
///
/// let logger = Logger::new(create(Destination::Database));
/// logger.log("System initialized.")?;
///
/// logger.set_strategy(create(Destination::Console));
/// assert_eq!(logger.strategy_name(), "console");
/// # Ok::<(), strategy_logger::LoggerError>(())
/// ```
pub struct Logger {
    strategy: Mutex<Box<dyn LogStrategy>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(strategy: Box<dyn LogStrategy>) -> Self {
        Self {
            strategy: Mutex::new(strategy),
            metrics: LoggerMetrics::new(),
        }
    }

    #[must_use]
    pub fn with_strategy<S: LogStrategy + 'static>(strategy: S) -> Self {
        Self::new(Box::new(strategy))
    }

    /// Replace the active strategy. The previous one is dropped once the
    /// lock is released.
    pub fn set_strategy(&self, strategy: Box<dyn LogStrategy>) {
        let previous = {
            let mut current = self.strategy.lock();
            std::mem::replace(&mut *current, strategy)
        };
        self.metrics.record_swap();
        drop(previous);
    }

    /// Forward `message` to the active strategy.
    ///
    /// Errors from the strategy are returned as-is.
    pub fn log(&self, message: impl AsRef<str>) -> Result<()> {
        let result = self.strategy.lock().log(message.as_ref());
        match result {
            Ok(()) => {
                self.metrics.record_logged();
            }
            Err(_) => {
                self.metrics.record_failed();
            }
        }
        result
    }

    pub fn flush(&self) -> Result<()> {
        self.strategy.lock().flush()
    }

    /// Name of the active strategy
    pub fn strategy_name(&self) -> String {
        self.strategy.lock().name().to_string()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strategy = match self.strategy.try_lock() {
            Some(current) => current.name().to_string(),
            None => "<locked>".to_string(),
        };
        f.debug_struct("Logger")
            .field("strategy", &strategy)
            .field("metrics", &self.metrics)
            .finish()
    }
}
