//! Error types for the logger system

use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Why a log directory was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryProblem {
    Missing,
    NotADirectory,
}

/// Sink a steady-state write failure happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Durable,
    Primary,
    Remote,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SinkKind::Durable => "durable",
            SinkKind::Primary => "primary",
            SinkKind::Remote => "remote",
        })
    }
}

/// Error kinds without their payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RemoteSinkSetupFailed,
    InvalidLogDirectory,
    DirectoryStatFailed,
    LogFileOpenFailed,
    SinkWrite,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Remote sink connection could not be established
    #[error("new syslog setup error: {source}")]
    RemoteSinkSetupFailed {
        app_name: String,
        #[source]
        source: io::Error,
    },

    /// Parent directory of the log file is missing or not a directory
    #[error("{}", invalid_directory_message(.path, .reason))]
    InvalidLogDirectory {
        path: PathBuf,
        reason: DirectoryProblem,
    },

    /// Parent directory could not be inspected
    #[error("log file dir={} stat error: {source}", .path.display())]
    DirectoryStatFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Log file could not be opened or created
    #[error("log file={} open error: {source}", .path.display())]
    LogFileOpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sink write failed; reported to observers, never to log callers
    #[error("{sink} sink write failed: {source}")]
    SinkWrite {
        sink: SinkKind,
        #[source]
        source: io::Error,
    },
}

fn invalid_directory_message(path: &std::path::Path, reason: &DirectoryProblem) -> String {
    match reason {
        DirectoryProblem::Missing => format!("log file dir={} does not exist", path.display()),
        DirectoryProblem::NotADirectory => {
            format!("the path={} exists but is not directory", path.display())
        }
    }
}

impl LoggerError {
    pub fn remote_setup(app_name: impl Into<String>, source: io::Error) -> Self {
        LoggerError::RemoteSinkSetupFailed {
            app_name: app_name.into(),
            source,
        }
    }

    pub fn invalid_directory(path: impl Into<PathBuf>, reason: DirectoryProblem) -> Self {
        LoggerError::InvalidLogDirectory {
            path: path.into(),
            reason,
        }
    }

    pub fn directory_stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoggerError::DirectoryStatFailed {
            path: path.into(),
            source,
        }
    }

    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoggerError::LogFileOpenFailed {
            path: path.into(),
            source,
        }
    }

    pub fn sink_write(sink: SinkKind, source: io::Error) -> Self {
        LoggerError::SinkWrite { sink, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoggerError::RemoteSinkSetupFailed { .. } => ErrorKind::RemoteSinkSetupFailed,
            LoggerError::InvalidLogDirectory { .. } => ErrorKind::InvalidLogDirectory,
            LoggerError::DirectoryStatFailed { .. } => ErrorKind::DirectoryStatFailed,
            LoggerError::LogFileOpenFailed { .. } => ErrorKind::LogFileOpenFailed,
            LoggerError::SinkWrite { .. } => ErrorKind::SinkWrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_directory("/nope", DirectoryProblem::Missing);
        assert!(matches!(err, LoggerError::InvalidLogDirectory { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidLogDirectory);

        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err = LoggerError::remote_setup("svc", io_err);
        assert_eq!(err.kind(), ErrorKind::RemoteSinkSetupFailed);
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_directory("/var/log/app", DirectoryProblem::Missing);
        assert_eq!(err.to_string(), "log file dir=/var/log/app does not exist");

        let err = LoggerError::invalid_directory("/etc/hosts", DirectoryProblem::NotADirectory);
        assert_eq!(
            err.to_string(),
            "the path=/etc/hosts exists but is not directory"
        );

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::file_open("/var/log/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "log file=/var/log/app.log open error: access denied"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no syslog socket");
        let err = LoggerError::remote_setup("svc", io_err);
        assert_eq!(err.to_string(), "new syslog setup error: no syslog socket");

        let source = err.source().expect("wrapped transport error");
        assert_eq!(source.to_string(), "no syslog socket");
    }

    #[test]
    fn test_sink_write_display() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::sink_write(SinkKind::Primary, io_err);
        assert_eq!(err.to_string(), "primary sink write failed: pipe closed");
    }
}
