//! Remote severity sink trait for system-log transports

use std::io;

/// A transport that accepts lines tagged with one of the eight syslog
/// severities. Severity filtering, if any, belongs to the transport.
pub trait RemoteSink: Send {
    fn debug(&mut self, msg: &str) -> io::Result<()>;
    fn info(&mut self, msg: &str) -> io::Result<()>;
    fn notice(&mut self, msg: &str) -> io::Result<()>;
    fn warning(&mut self, msg: &str) -> io::Result<()>;
    fn err(&mut self, msg: &str) -> io::Result<()>;
    fn crit(&mut self, msg: &str) -> io::Result<()>;
    fn alert(&mut self, msg: &str) -> io::Result<()>;
    fn emerg(&mut self, msg: &str) -> io::Result<()>;

    fn name(&self) -> &str {
        "remote"
    }
}
