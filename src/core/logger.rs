//! Main logger implementation

use super::{
    config::{LoggerConfig, RemoteMask},
    error::{LoggerError, Result, SinkKind},
    formatter::Formatter,
    metrics::SinkMetrics,
    remote_sink::RemoteSink,
    severity::{Level, Severity},
    template::interpolate,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::io;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Observer for sink write failures
///
/// Called after the sink lock is released, so it may log through the same
/// logger.
pub type SinkErrorCallback = Arc<dyn Fn(SinkKind, &LoggerError) + Send + Sync>;

struct Sinks {
    durable: Option<FileAppender>,
    primary: Option<ConsoleAppender>,
    remote: Option<Box<dyn RemoteSink>>,
}

/// Fans every log call out to a log file, stdout/stderr and the system log
///
/// Sinks are written in a fixed order: durable file, primary stream, remote
/// sink. A missing sink is skipped, and a failing sink never stops the
/// others. Logging methods never return errors; failures show up in
/// [`metrics`](Logger::metrics) and the optional error observer.
///
/// # Example
///
/// ```no_run
/// use multi_sink_logger::prelude::*;
///
/// let logger = Logger::new("svc", "/var/log/svc.log", false, RemoteMask::UNSET)?;
/// logger.warn("disk low");
/// logger.infof("%d requests served", &[&128]);
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger {
    app_name: String,
    sinks: Mutex<Sinks>,
    formatter: Formatter,
    metrics: Arc<SinkMetrics>,
    on_sink_error: Option<SinkErrorCallback>,
}

impl Logger {
    /// Create a logger.
    ///
    /// The remote sink is connected first when `enable_remote` is set
    /// (an unset mask means `Info | Syslog`). A non-empty `file_path` then
    /// opens the durable sink; an empty one leaves it absent.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::RemoteSinkSetupFailed`] if the system log is unreachable
    /// - [`LoggerError::InvalidLogDirectory`] if the file's directory is missing
    ///   or not a directory
    /// - [`LoggerError::DirectoryStatFailed`] if that directory cannot be inspected
    /// - [`LoggerError::LogFileOpenFailed`] if the file cannot be opened
    pub fn new(
        app_name: impl Into<String>,
        file_path: impl AsRef<Path>,
        enable_remote: bool,
        remote_mask: RemoteMask,
    ) -> Result<Self> {
        let config = LoggerConfig {
            app_name: app_name.into(),
            file_path: Some(file_path.as_ref().to_path_buf()),
            enable_remote,
            remote_mask,
            ..LoggerConfig::default()
        };
        Self::from_config(&config)
    }

    /// Like [`new`](Logger::new), but prints the error to stderr and exits
    /// with status 1 on failure.
    pub fn new_or_fatal(
        app_name: impl Into<String>,
        file_path: impl AsRef<Path>,
        enable_remote: bool,
        remote_mask: RemoteMask,
    ) -> Self {
        Self::new(app_name, file_path, enable_remote, remote_mask).unwrap_or_else(|e| fatal(&e))
    }

    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config.clone()).build()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn durable_path(&self) -> Option<PathBuf> {
        self.sinks
            .lock()
            .durable
            .as_ref()
            .map(|file| file.path().to_path_buf())
    }

    pub fn has_durable_sink(&self) -> bool {
        self.sinks.lock().durable.is_some()
    }

    pub fn has_primary_output(&self) -> bool {
        self.sinks.lock().primary.is_some()
    }

    pub fn has_remote_sink(&self) -> bool {
        self.sinks.lock().remote.is_some()
    }

    /// Sink health counters
    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Render and fan out one line.
    ///
    /// Formatted levels go through the formatter. [`Level::Raw`] skips
    /// decoration but always interpolates, so `%%` prints as `%` even
    /// without arguments.
    pub fn dispatch(&self, level: Level, template: &str, args: &[&dyn Display]) {
        let line = match level {
            Level::Formatted(severity) => self.formatter.format(severity, template, args),
            Level::Raw => interpolate(template, args),
        };
        self.fan_out(level, &line);
    }

    fn fan_out(&self, level: Level, line: &str) {
        self.metrics.record_dispatched();
        let mut failures: Vec<(SinkKind, io::Error)> = Vec::new();

        {
            let mut sinks = self.sinks.lock();
            let Sinks {
                durable,
                primary,
                remote,
            } = &mut *sinks;

            if let Some(file) = durable {
                if let Err(e) = isolate(|| file.append_line(line)) {
                    failures.push((SinkKind::Durable, e));
                }
            }

            if let Some(console) = primary {
                if let Err(e) = isolate(|| console.write_line(level.stream(), line)) {
                    failures.push((SinkKind::Primary, e));
                }
            }

            if let Some(sink) = remote {
                let write = level.remote_writer();
                if let Err(e) = isolate(|| write(sink.as_mut(), line)) {
                    failures.push((SinkKind::Remote, e));
                }
            }
        }

        for (sink, source) in failures {
            self.metrics.record_failure(sink);
            if let Some(ref callback) = self.on_sink_error {
                callback(sink, &LoggerError::sink_write(sink, source));
            }
        }
    }

    #[inline]
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        self.dispatch(Level::Formatted(severity), message.as_ref(), &[]);
    }

    #[inline]
    pub fn logf(&self, severity: Severity, template: &str, args: &[&dyn Display]) {
        self.dispatch(Level::Formatted(severity), template, args);
    }

    /// Print `message` as is: no level or time decoration, no interpolation.
    #[inline]
    pub fn println(&self, message: impl AsRef<str>) {
        self.fan_out(Level::Raw, message.as_ref());
    }

    /// Interpolate and print without decoration.
    #[inline]
    pub fn printf(&self, template: &str, args: &[&dyn Display]) {
        self.dispatch(Level::Raw, template, args);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn debugf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Debug, template, args);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn infof(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Info, template, args);
    }

    #[inline]
    pub fn notice(&self, message: impl AsRef<str>) {
        self.log(Severity::Notice, message);
    }

    #[inline]
    pub fn noticef(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Notice, template, args);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn warnf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Warning, template, args);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message);
    }

    #[inline]
    pub fn errorf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Error, template, args);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Severity::Critical, message);
    }

    #[inline]
    pub fn criticalf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Critical, template, args);
    }

    #[inline]
    pub fn alert(&self, message: impl AsRef<str>) {
        self.log(Severity::Alert, message);
    }

    #[inline]
    pub fn alertf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Alert, template, args);
    }

    #[inline]
    pub fn emergency(&self, message: impl AsRef<str>) {
        self.log(Severity::Emergency, message);
    }

    #[inline]
    pub fn emergencyf(&self, template: &str, args: &[&dyn Display]) {
        self.logf(Severity::Emergency, template, args);
    }

    /// Flush the durable sink and the primary streams.
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        if let Some(file) = sinks.durable.as_mut() {
            file.flush()
                .map_err(|e| LoggerError::sink_write(SinkKind::Durable, e))?;
        }
        if let Some(console) = sinks.primary.as_mut() {
            console
                .flush()
                .map_err(|e| LoggerError::sink_write(SinkKind::Primary, e))?;
        }
        Ok(())
    }

    /// Flush and release the file handle and the remote connection.
    pub fn close(self) -> Result<()> {
        self.flush()
    }
}

/// Run one sink write, turning a panic into an error so the remaining
/// sinks still run.
fn isolate<F>(write: F) -> io::Result<()>
where
    F: FnOnce() -> io::Result<()>,
{
    match catch_unwind(AssertUnwindSafe(write)) {
        Ok(result) => result,
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            Err(io::Error::other(format!("sink panicked: {}", panic_msg)))
        }
    }
}

pub(crate) fn fatal(err: &LoggerError) -> ! {
    eprintln!("{}", err);
    std::process::exit(1)
}

fn connect_remote(
    app_name: &str,
    mask: RemoteMask,
    socket: Option<&Path>,
) -> Result<Box<dyn RemoteSink>> {
    #[cfg(all(unix, feature = "syslog"))]
    {
        use crate::appenders::SyslogWriter;

        let writer = match socket {
            Some(path) => SyslogWriter::connect_to(mask, app_name, path),
            None => SyslogWriter::connect(mask, app_name),
        };
        writer
            .map(|writer| Box::new(writer) as Box<dyn RemoteSink>)
            .map_err(|e| LoggerError::remote_setup(app_name, e))
    }

    #[cfg(not(all(unix, feature = "syslog")))]
    {
        let _ = (mask, socket);
        Err(LoggerError::remote_setup(
            app_name,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "syslog transport is not available on this build",
            ),
        ))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks = self.sinks.lock();
        f.debug_struct("Logger")
            .field("app_name", &self.app_name)
            .field("durable", &sinks.durable.as_ref().map(FileAppender::path))
            .field("primary", &sinks.primary.is_some())
            .field("remote", &sinks.remote.as_ref().map(|sink| sink.name()))
            .finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let sinks = self.sinks.get_mut();
        if let Some(file) = sinks.durable.as_mut() {
            let _ = file.flush();
        }
        if let Some(console) = sinks.primary.as_mut() {
            let _ = console.flush();
        }

        // Report any degraded sinks
        let failed = self.metrics.total_failures();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' shutting down with {} failed sink writes (failure rate: {:.2}%)",
                self.app_name,
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use multi_sink_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .app_name("svc")
///     .primary_output(false)
///     .on_sink_error(Arc::new(|sink: SinkKind, err: &LoggerError| {
///         eprintln!("ALERT: {} sink degraded: {}", sink, err);
///     }))
///     .build()?;
/// logger.info("no sinks attached, nothing written");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    remote_socket: Option<PathBuf>,
    remote_sink: Option<Box<dyn RemoteSink>>,
    console: Option<ConsoleAppender>,
    formatter: Formatter,
    on_sink_error: Option<SinkErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            remote_socket: None,
            remote_sink: None,
            console: None,
            formatter: Formatter::default(),
            on_sink_error: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.config.app_name = app_name.into();
        self
    }

    /// Attach a durable sink; an empty path attaches none
    #[must_use = "builder methods return a new value"]
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    /// Connect to the system log on build
    #[must_use = "builder methods return a new value"]
    pub fn remote(mut self, mask: RemoteMask) -> Self {
        self.config.enable_remote = true;
        self.config.remote_mask = mask;
        self
    }

    /// Reach the system log through `path` instead of the well-known sockets
    #[must_use = "builder methods return a new value"]
    pub fn remote_socket(mut self, path: impl Into<PathBuf>) -> Self {
        self.remote_socket = Some(path.into());
        self
    }

    /// Use an already connected remote sink instead of the system log
    #[must_use = "builder methods return a new value"]
    pub fn remote_sink<S: RemoteSink + 'static>(mut self, sink: S) -> Self {
        self.remote_sink = Some(Box::new(sink));
        self
    }

    /// Enable or disable stdout/stderr output
    ///
    /// Default: enabled
    #[must_use = "builder methods return a new value"]
    pub fn primary_output(mut self, enable: bool) -> Self {
        self.config.primary_output = enable;
        self
    }

    /// Replace the stdout/stderr writers
    #[must_use = "builder methods return a new value"]
    pub fn primary_streams(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set a callback for sink write failures
    #[must_use = "builder methods return a new value"]
    pub fn on_sink_error(mut self, callback: SinkErrorCallback) -> Self {
        self.on_sink_error = Some(callback);
        self
    }

    /// Connect the remote sink, open the durable sink, and build the Logger
    pub fn build(self) -> Result<Logger> {
        let LoggerBuilder {
            config,
            remote_socket,
            remote_sink,
            console,
            formatter,
            on_sink_error,
        } = self;

        let remote = match remote_sink {
            Some(sink) => Some(sink),
            None if config.enable_remote => {
                Some(connect_remote(
                    &config.app_name,
                    config.remote_mask,
                    remote_socket.as_deref(),
                )?)
            }
            None => None,
        };

        let durable = config.durable_path().map(FileAppender::open).transpose()?;

        let primary = if config.primary_output {
            Some(console.unwrap_or_default())
        } else {
            None
        };

        Ok(Logger {
            app_name: config.app_name,
            sinks: Mutex::new(Sinks {
                durable,
                primary,
                remote,
            }),
            formatter,
            metrics: Arc::new(SinkMetrics::new()),
            on_sink_error,
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
