//! Strategy factory
//!
//! Maps a [`Destination`] to a freshly constructed strategy. Nothing is cached:
//! every call returns a new instance.

use crate::core::{Destination, FactoryConfig, LogStrategy, Result};
use crate::strategies::{ConsoleStrategy, DatabaseStrategy, FileStrategy};

/// Builds strategies from a shared [`FactoryConfig`]
///
/// # Examples
///
/// ```
/// use strategy_logger::{Destination, FactoryConfig, LogStrategy, StrategyFactory};
///
/// let factory = StrategyFactory::with_config(FactoryConfig::new().with_file_path("app.log"));
/// let strategy = factory.create(Destination::File);
/// assert_eq!(strategy.name(), "file");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StrategyFactory {
    config: FactoryConfig,
}

impl StrategyFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: FactoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn create(&self, destination: Destination) -> Box<dyn LogStrategy> {
        let timestamp_format = self.config.timestamp_format.clone();
        match destination {
            Destination::Console => {
                Box::new(ConsoleStrategy::new().with_timestamp_format(timestamp_format))
            }
            Destination::File => Box::new(
                FileStrategy::new(self.config.file_path.clone())
                    .with_timestamp_format(timestamp_format),
            ),
            Destination::Database => Box::new(DatabaseStrategy::new()),
        }
    }

    /// Parse `destination` and build the matching strategy.
    ///
    /// Unknown names fail with [`LoggerError::UnsupportedDestination`](crate::LoggerError::UnsupportedDestination).
    pub fn create_from_str(&self, destination: &str) -> Result<Box<dyn LogStrategy>> {
        let destination: Destination = destination.parse()?;
        Ok(self.create(destination))
    }
}

/// Build a strategy with the default configuration
pub fn create(destination: Destination) -> Box<dyn LogStrategy> {
    StrategyFactory::new().create(destination)
}

/// Build a strategy from its name with the default configuration
pub fn create_from_str(destination: &str) -> Result<Box<dyn LogStrategy>> {
    StrategyFactory::new().create_from_str(destination)
}
