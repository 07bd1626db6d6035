//! Process-wide default logger example
//!
//! Installs a default logger and logs through the free functions.
//!
//! Run with: cargo run --example global_logging

use multi_sink_logger::global;
use multi_sink_logger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Multi-Sink Logger - Global Logging Example ===\n");

    // Before install the free functions use a console-only logger
    global::info("not installed yet");

    // Exits with status 1 if global.log cannot be opened
    global::new_global_logger_or_fatal(
        "demo",
        "global.log",
        false,
        RemoteMask::new(Facility::User, Severity::Info),
    );

    global::info("Global Info");
    global::error("Global ERROR");
    global::noticef("pid=%d", &[&std::process::id()]);

    println!("\nLogging from several threads:");
    let handles: Vec<_> = (0..4)
        .map(|id| {
            thread::spawn(move || {
                for i in 0..3 {
                    global::infof("thread %d message %d", &[&id, &i]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    println!("\nSwapping in a logger without a file:");
    let quiet = Logger::builder()
        .app_name("demo")
        .on_sink_error(Arc::new(|sink: SinkKind, err: &LoggerError| {
            eprintln!("{} sink degraded: {}", sink, err);
        }))
        .build()
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1)
        });
    if let Some(previous) = global::install(quiet) {
        if let Err(e) = previous.flush() {
            eprintln!("{}", e);
        }
    }
    global::warn("now console only");

    println!("\n=== Example completed successfully ===");
    println!("Check global.log for file output");
}
