//! Strategy implementations

pub mod console;
pub mod database;
pub mod file;

pub use console::ConsoleStrategy;
pub use database::DatabaseStrategy;
pub use file::FileStrategy;

pub use crate::core::LogStrategy;
