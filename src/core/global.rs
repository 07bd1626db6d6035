//! Process-wide default logger
//!
//! The free functions in this module forward to whichever [`Logger`] was
//! last installed, so call sites can log without holding a reference.
//!
//! The slot moves through three states: uninitialized, installed, in use.
//! Installing swaps the slot under a write lock and is safe while other
//! threads are logging; calls already in flight finish on the logger they
//! started with. Before the first install the functions write to a
//! console-only logger (no file, no system log).
//!
//! ```no_run
//! use multi_sink_logger::global;
//! use multi_sink_logger::RemoteMask;
//!
//! global::new_global_logger("svc", "/var/log/svc.log", false, RemoteMask::UNSET)?;
//! global::error("boom");
//! global::infof("listening on %d", &[&8080]);
//! # Ok::<(), multi_sink_logger::LoggerError>(())
//! ```

use super::config::RemoteMask;
use super::error::Result;
use super::logger::{fatal, Logger};
use parking_lot::RwLock;
use std::fmt::Display;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static DEFAULT: RwLock<Option<Arc<Logger>>> = RwLock::new(None);
static FALLBACK: OnceLock<Arc<Logger>> = OnceLock::new();

fn fallback() -> Arc<Logger> {
    Arc::clone(FALLBACK.get_or_init(|| {
        let logger = Logger::builder()
            .build()
            .unwrap_or_else(|e| fatal(&e));
        Arc::new(logger)
    }))
}

/// Install `logger` as the default, returning the one it replaces.
pub fn install(logger: impl Into<Arc<Logger>>) -> Option<Arc<Logger>> {
    DEFAULT.write().replace(logger.into())
}

/// Empty the slot; later calls go to the console-only fallback.
pub fn uninstall() -> Option<Arc<Logger>> {
    DEFAULT.write().take()
}

pub fn is_installed() -> bool {
    DEFAULT.read().is_some()
}

/// The installed logger, if any
pub fn current() -> Option<Arc<Logger>> {
    DEFAULT.read().clone()
}

/// Construct a logger like [`Logger::new`] and install it as the default.
pub fn new_global_logger(
    app_name: impl Into<String>,
    file_path: impl AsRef<Path>,
    enable_remote: bool,
    remote_mask: RemoteMask,
) -> Result<()> {
    let logger = Logger::new(app_name, file_path, enable_remote, remote_mask)?;
    install(logger);
    Ok(())
}

/// Like [`new_global_logger`], but exits with status 1 on failure.
pub fn new_global_logger_or_fatal(
    app_name: impl Into<String>,
    file_path: impl AsRef<Path>,
    enable_remote: bool,
    remote_mask: RemoteMask,
) {
    if let Err(e) = new_global_logger(app_name, file_path, enable_remote, remote_mask) {
        fatal(&e);
    }
}

fn logger() -> Arc<Logger> {
    current().unwrap_or_else(fallback)
}

pub fn println(message: impl AsRef<str>) {
    logger().println(message);
}

pub fn printf(template: &str, args: &[&dyn Display]) {
    logger().printf(template, args);
}

pub fn debug(message: impl AsRef<str>) {
    logger().debug(message);
}

pub fn debugf(template: &str, args: &[&dyn Display]) {
    logger().debugf(template, args);
}

pub fn info(message: impl AsRef<str>) {
    logger().info(message);
}

pub fn infof(template: &str, args: &[&dyn Display]) {
    logger().infof(template, args);
}

pub fn notice(message: impl AsRef<str>) {
    logger().notice(message);
}

pub fn noticef(template: &str, args: &[&dyn Display]) {
    logger().noticef(template, args);
}

pub fn warn(message: impl AsRef<str>) {
    logger().warn(message);
}

pub fn warnf(template: &str, args: &[&dyn Display]) {
    logger().warnf(template, args);
}

pub fn error(message: impl AsRef<str>) {
    logger().error(message);
}

pub fn errorf(template: &str, args: &[&dyn Display]) {
    logger().errorf(template, args);
}

pub fn critical(message: impl AsRef<str>) {
    logger().critical(message);
}

pub fn criticalf(template: &str, args: &[&dyn Display]) {
    logger().criticalf(template, args);
}

pub fn alert(message: impl AsRef<str>) {
    logger().alert(message);
}

pub fn alertf(template: &str, args: &[&dyn Display]) {
    logger().alertf(template, args);
}

pub fn emergency(message: impl AsRef<str>) {
    logger().emergency(message);
}

pub fn emergencyf(template: &str, args: &[&dyn Display]) {
    logger().emergencyf(template, args);
}
