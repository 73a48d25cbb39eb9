//! Basic logger usage example
//!
//! Demonstrates every level, chained fields, deferred messages and a
//! temporary threshold, all written to standard error.
//!
//! Run with: cargo run --example basic_usage

use rust_console_logger::prelude::*;
use rust_console_logger::{fields, info};

fn main() -> Result<()> {
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .handler(ConsoleHandler::stderr())
        .fields(fields!(app = "demo"))
        .build()?;

    logger.debug(["Resolving", "dependencies"])?;
    logger.info("Starting deploy")?;
    logger.wait(["Waiting for", "health checks"])?;
    logger.warn_with_fields("Slow response", fields!(latency_ms = 840))?;
    logger.error(["Failed to", "reach mirror"])?;
    logger.success("Deployed successfully")?;

    let request = logger.with(fields!(request_id = "abc-123"));
    info!(request, "Handled {} requests", 3)?;

    let quiet = logger.at_level(LogLevel::Warn);
    quiet.info(MessageSource::deferred(|| {
        unreachable!("dropped calls never build their message")
    }))?;

    logger.fatal("Shutting down")?;
    Ok(())
}
