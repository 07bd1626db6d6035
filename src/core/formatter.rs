//! Line formatting
//!
//! The default line shape is
//!
//! ```text
//! WARNING | CET | 08/01/2025 10:30:45.123 | disk low
//! ```
//!
//! with the label left-justified to seven columns.

use super::severity::Severity;
use super::template::interpolate;
use super::timestamp::Timestamp;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Width of the level column
pub const LEVEL_WIDTH: usize = 7;

/// Field separator between columns
pub const SEPARATOR: &str = " | ";

type FormatFn = dyn Fn(Severity, &str, &[&dyn Display]) -> String + Send + Sync;

/// Renders a severity, template and arguments into one line
///
/// Cheap to clone; every clone shares the same function.
///
/// # Example
///
/// ```
/// use multi_sink_logger::core::{Formatter, Severity};
///
/// let plain = Formatter::new(|severity, template, _args| {
///     format!("{}: {}", severity, template)
/// });
/// assert_eq!(plain.format(Severity::Info, "ready", &[]), "INFO: ready");
/// ```
#[derive(Clone)]
pub struct Formatter {
    inner: Arc<FormatFn>,
}

impl Formatter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Severity, &str, &[&dyn Display]) -> String + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    #[inline]
    pub fn format(&self, severity: Severity, template: &str, args: &[&dyn Display]) -> String {
        (self.inner)(severity, template, args)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(format_line)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter").finish_non_exhaustive()
    }
}

/// The default formatter, reading the clock once per line.
pub fn format_line(severity: Severity, template: &str, args: &[&dyn Display]) -> String {
    format_line_at(severity, template, args, &Timestamp::now())
}

/// Render a line for an already captured timestamp.
///
/// `args` are interpolated into `template` only when there are any; an
/// empty `args` slice keeps the template verbatim, `%` tokens included.
pub fn format_line_at(
    severity: Severity,
    template: &str,
    args: &[&dyn Display],
    timestamp: &Timestamp,
) -> String {
    let interpolated;
    let message = if args.is_empty() {
        template
    } else {
        interpolated = interpolate(template, args);
        interpolated.as_str()
    };

    format!(
        "{:<width$}{sep}{}{sep}{}{sep}{}",
        severity.label(),
        timestamp.zone(),
        timestamp.stamp(),
        message,
        width = LEVEL_WIDTH,
        sep = SEPARATOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> Timestamp {
        let local = NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_milli_opt(10, 30, 45, 123))
            .expect("valid datetime");
        Timestamp::from_parts(local, "CET")
    }

    #[test]
    fn test_line_shape() {
        let line = format_line_at(Severity::Warning, "disk low", &[], &fixed());
        assert_eq!(line, "WARNING | CET | 08/01/2025 10:30:45.123 | disk low");
    }

    #[test]
    fn test_short_labels_are_padded() {
        let line = format_line_at(Severity::Info, "ok", &[], &fixed());
        assert_eq!(line, "INFO    | CET | 08/01/2025 10:30:45.123 | ok");

        let line = format_line_at(Severity::Critical, "ok", &[], &fixed());
        assert!(line.starts_with("CRIT    | "));
    }

    #[test]
    fn test_args_are_interpolated() {
        let line = format_line_at(Severity::Emergency, "instance emerg=%d", &[&1], &fixed());
        assert!(line.ends_with(" | instance emerg=1"));
        assert!(line.starts_with("EMERG   | "));
    }

    #[test]
    fn test_template_verbatim_without_args() {
        let line = format_line_at(Severity::Debug, "100% done, %d left", &[], &fixed());
        assert!(line.ends_with(" | 100% done, %d left"));
    }

    #[test]
    fn test_default_formatter_uses_clock() {
        let line = Formatter::default().format(Severity::Notice, "hello", &[]);
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], "NOTICE ");
        assert_eq!(fields[3], "hello");
    }

    #[test]
    fn test_custom_formatter() {
        let formatter = Formatter::new(|severity, template, args| {
            format!("[{}] {}", severity.code(), interpolate(template, args))
        });
        assert_eq!(formatter.format(Severity::Error, "code=%d", &[&7]), "[3] code=7");
    }
}
