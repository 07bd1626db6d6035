//! # Multi-Sink Logger
//!
//! A leveled logging facade that writes every call to up to three places:
//! a local log file, the process's stdout/stderr, and the system log.
//!
//! ## Features
//!
//! - **Eight syslog severities**: Debug through Emergency, each with a label
//!   and a matching system log priority
//! - **Fixed fan-out order**: log file, then stdout/stderr, then system log
//! - **Failure isolation**: a failing sink never stops the others and never
//!   surfaces to the caller
//! - **Process-wide default**: free functions in [`global`] forward to an
//!   installed logger
//!
//! Decorated lines look like this:
//!
//! ```text
//! WARNING | CET | 08/01/2025 10:30:45.123 | disk low
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use multi_sink_logger::prelude::*;
//!
//! let logger = Logger::new("svc", "/var/log/svc.log", true, RemoteMask::UNSET)?;
//! logger.warn("disk low");
//! logger.errorf("request %s failed: %d", &[&"GET /", &503]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub use crate::core::global;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    #[cfg(all(unix, feature = "syslog"))]
    pub use crate::appenders::SyslogWriter;
    pub use crate::core::{
        Facility, Formatter, Level, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        RemoteMask, RemoteSink, Result, Severity, SinkErrorCallback, SinkKind, SinkMetrics,
        Stream,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
#[cfg(all(unix, feature = "syslog"))]
pub use crate::appenders::SyslogWriter;
pub use crate::core::{
    format_line, interpolate, label_of, DirectoryProblem, ErrorKind, Facility, Formatter, Level,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, RemoteMask, RemoteSink, Result, Severity,
    SinkErrorCallback, SinkKind, SinkMetrics, Stream,
};
