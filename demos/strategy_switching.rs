//! Strategy switching example
//!
//! Picks a strategy by name, logs through it, then swaps to the file and
//! mock database strategies on the same logger.
//!
//! Run with: cargo run --example strategy_switching

use strategy_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::new(create_from_str("console")?);
    logger.log("System initialized.")?;

    logger.set_strategy(create_from_str("file")?);
    logger.log("File log entry.")?;
    println!("Wrote one line to {}", DEFAULT_LOG_FILE);

    logger.set_strategy(create(Destination::Database));
    logger.log("Database log entry.")?;

    match create_from_str("syslog") {
        Ok(_) => unreachable!("syslog is not a known destination"),
        Err(e) => println!("Rejected: {}", e),
    }

    let metrics = logger.metrics();
    println!(
        "Logged {} messages across {} strategy swaps",
        metrics.total_logged(),
        metrics.strategy_swaps()
    );

    Ok(())
}
