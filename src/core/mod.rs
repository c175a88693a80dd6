//! Core logger types and traits

pub mod config;
pub mod destination;
pub mod error;
pub mod logger;
pub mod metrics;
pub mod strategy;
pub mod timestamp;

pub use config::{FactoryConfig, DEFAULT_LOG_FILE};
pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use strategy::LogStrategy;
pub use timestamp::TimestampFormat;
