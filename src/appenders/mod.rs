//! Sink implementations

pub mod console;
pub mod file;
#[cfg(all(unix, feature = "syslog"))]
pub mod syslog;

pub use console::ConsoleAppender;
pub use file::FileAppender;
#[cfg(all(unix, feature = "syslog"))]
pub use self::syslog::SyslogWriter;

pub use crate::core::RemoteSink;
