//! Logging macro for `format!`-style messages.
//!
//! # Examples
//!
//! ```
//! use strategy_logger::prelude::*;
//! use strategy_logger::log;
//!
//! let logger = Logger::new(create(Destination::Database));
//!
//! let port = 8080;
//! log!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Format the arguments and pass the result to `Logger::log`.
///
/// Evaluates to the `Result` returned by the logger.
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+))
    };
}
