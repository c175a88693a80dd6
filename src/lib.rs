//! # Strategy Logger
//!
//! A small logging facade built from interchangeable output strategies.
//!
//! ## Features
//!
//! - **Swappable Strategies**: Console, file and mock database outputs behind one trait
//! - **Factory**: Build a strategy from a [`Destination`] or its name
//! - **Thread Safe**: The active strategy can be replaced while other threads log
//!
//! ```no_run
//! use strategy_logger::prelude::*;
//!
//! let logger = Logger::new(create_from_str("console")?);
//! logger.log("System initialized.")?;
//!
//! logger.set_strategy(create(Destination::File));
//! logger.log("File log entry.")?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod factory;
pub mod macros;
pub mod strategies;

pub mod prelude {
    pub use crate::core::{
        Destination, FactoryConfig, LogStrategy, Logger, LoggerError, LoggerMetrics, Result,
        TimestampFormat, DEFAULT_LOG_FILE,
    };
    pub use crate::factory::{create, create_from_str, StrategyFactory};
    pub use crate::strategies::{ConsoleStrategy, DatabaseStrategy, FileStrategy};
}

pub use crate::core::{
    Destination, FactoryConfig, LogStrategy, Logger, LoggerError, LoggerMetrics, Result,
    TimestampFormat, DEFAULT_LOG_FILE,
};
pub use factory::{create, create_from_str, StrategyFactory};
pub use strategies::{ConsoleStrategy, DatabaseStrategy, FileStrategy};
