//! Basic logger usage example
//!
//! Demonstrates an instance logger writing to a log file and stdout/stderr,
//! and a second one without a file.
//!
//! Run with: cargo run --example basic_usage
//!
//! Set `SYSLOG=1` to also send every line to the local system log.

use multi_sink_logger::prelude::*;
use multi_sink_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Multi-Sink Logger - Basic Usage Example ===\n");

    let enable_remote = std::env::var_os("SYSLOG").is_some();
    let mask = RemoteMask::new(Facility::User, Severity::Info);

    println!("1. Logging at every severity to instance.log:");
    let logger = Logger::new("demo", "instance.log", enable_remote, mask)?;
    logger.debug("instance debug");
    logger.info("instance info");
    logger.notice("instance notice");
    logger.warn("instance warn");
    logger.error("instance error");
    logger.critical("instance crit");
    logger.alertf("instance alert=%d", &[&15]);
    logger.emergencyf("instance emerg=%d", &[&1]);

    println!("\n2. No file output:");
    let console_only = Logger::new("demo", "", enable_remote, mask)?;
    console_only.info("instance2 no file output");
    console_only.println("instance2 println");
    console_only.printf("instance2 printf=%d", &[&21]);

    println!("\n3. Macros with Rust formatting:");
    let port = 8080;
    info!(console_only, "listening on port {}", port);
    warn!(console_only, "disk {}% full", 93);

    println!("\n4. Sink health:");
    let metrics = logger.metrics();
    println!(
        "   {} lines dispatched, {} failed sink writes",
        metrics.lines_dispatched(),
        metrics.total_failures()
    );

    logger.close()?;
    println!("\n=== Example completed successfully ===");
    println!("Check instance.log for file output");
    Ok(())
}
