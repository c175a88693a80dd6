//! Destination identifiers accepted by the strategy factory

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Console,
    File,
    Database,
}

impl Destination {
    pub const ALL: [Destination; 3] = [
        Destination::Console,
        Destination::File,
        Destination::Database,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Destination::Console => "console",
            Destination::File => "file",
            Destination::Database => "database",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Destination {
    type Err = LoggerError;

    /// Names are matched exactly; there is no fallback destination.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Destination::Console),
            "file" => Ok(Destination::File),
            "database" => Ok(Destination::Database),
            _ => Err(LoggerError::unsupported_destination(s)),
        }
    }
}
