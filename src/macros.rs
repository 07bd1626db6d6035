//! Logging macros for ergonomic log message formatting.
//!
//! These macros take Rust `format!` arguments and forward the finished
//! message to the matching [`Logger`](crate::Logger) method, so a literal
//! `%` in the output needs no escaping.
//!
//! # Examples
//!
//! ```
//! use multi_sink_logger::prelude::*;
//! use multi_sink_logger::{info, warn};
//!
//! let logger = Logger::builder().app_name("svc").build()?;
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "Disk {}% full", 93);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use multi_sink_logger::prelude::*;
/// # let logger = Logger::builder().build()?;
/// use multi_sink_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use multi_sink_logger::prelude::*;
/// # let logger = Logger::builder().build()?;
/// use multi_sink_logger::warn;
/// warn!(logger, "Retry {} of {}", 1, 3);
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::ConsoleAppender;
    use crate::core::{Logger, Severity};
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logger() -> (Logger, Capture, Capture) {
        let out = Capture::default();
        let err = Capture::default();
        let logger = Logger::builder()
            .primary_streams(ConsoleAppender::with_writers(out.clone(), err.clone()))
            .build()
            .unwrap();
        (logger, out, err)
    }

    fn text(capture: &Capture) -> String {
        String::from_utf8(capture.0.lock().clone()).unwrap()
    }

    #[test]
    fn test_log_macro() {
        let (logger, out, _err) = logger();
        log!(logger, Severity::Info, "Formatted: {}", 42);
        assert!(text(&out).ends_with(" | Formatted: 42\n"));
    }

    #[test]
    fn test_percent_needs_no_escaping() {
        let (logger, out, _err) = logger();
        warn!(logger, "Disk {}% full", 93);
        assert!(text(&out).starts_with("WARNING | "));
        assert!(text(&out).ends_with(" | Disk 93% full\n"));
    }

    #[test]
    fn test_stdout_macros() {
        let (logger, out, err) = logger();
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        notice!(logger, "Notice message");

        let out = text(&out);
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|line| !line.is_empty()));
        assert_eq!(text(&err), "");
    }

    #[test]
    fn test_stderr_macros() {
        let (logger, out, err) = logger();
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");
        alert!(logger, "Alert message");
        emergency!(logger, "Emergency message");

        let err = text(&err);
        let labels: Vec<&str> = err
            .lines()
            .map(|line| line.split(" | ").next().unwrap().trim_end())
            .collect();
        assert_eq!(labels, ["ERROR", "CRIT", "ALERT", "EMERG"]);
        assert_eq!(text(&out), "");
    }
}
