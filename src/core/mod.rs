//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod global;
pub mod logger;
pub mod metrics;
pub mod remote_sink;
pub mod severity;
pub mod template;
pub mod timestamp;

pub use config::{Facility, LoggerConfig, RemoteMask};
pub use error::{DirectoryProblem, ErrorKind, LoggerError, Result, SinkKind};
pub use formatter::{format_line, format_line_at, Formatter};
pub use logger::{Logger, LoggerBuilder, SinkErrorCallback};
pub use metrics::SinkMetrics;
pub use remote_sink::RemoteSink;
pub use severity::{label_of, Level, RemoteWrite, Severity, Stream, UNKNOWN_LABEL};
pub use template::interpolate;
pub use timestamp::Timestamp;
