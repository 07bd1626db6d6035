//! Local syslog transport
//!
//! Talks to the system log daemon through the `syslog` crate's Unix socket
//! backend, with lines framed in the BSD (RFC 3164) format:
//!
//! ```text
//! <46>Jan  8 10:30:45 svc[4242]: WARNING | CET | 08/01/2025 10:30:45.123 | disk low
//! ```
//!
//! A failed send triggers one reconnect and one resend before the error is
//! reported, like the network appender does for TCP.

use crate::core::{Facility, RemoteMask, RemoteSink, Severity};
use ::syslog::{Formatter3164, Logger, LoggerBackend};
use std::fmt::{self, Display};
use std::io;
use std::path::{Path, PathBuf};

type Backend = Logger<LoggerBackend, Formatter3164>;

/// Remote sink writing to the local syslog daemon
pub struct SyslogWriter {
    mask: RemoteMask,
    formatter: Formatter3164,
    socket: Option<PathBuf>,
    logger: Option<Backend>,
}

impl SyslogWriter {
    /// Connect to the local daemon on the first reachable well-known socket.
    ///
    /// An unset mask resolves to `Info | Syslog`; an empty tag becomes the
    /// program name.
    pub fn connect(mask: RemoteMask, tag: &str) -> io::Result<Self> {
        Self::open(mask, tag, None)
    }

    /// Connect through an explicit socket path
    pub fn connect_to(mask: RemoteMask, tag: &str, socket: impl Into<PathBuf>) -> io::Result<Self> {
        Self::open(mask, tag, Some(socket.into()))
    }

    fn open(mask: RemoteMask, tag: &str, socket: Option<PathBuf>) -> io::Result<Self> {
        let mask = mask.resolved();
        let process = if tag.is_empty() {
            Formatter3164::default().process
        } else {
            tag.to_string()
        };
        let formatter = Formatter3164 {
            facility: facility_of(mask.facility()),
            hostname: None,
            process,
            pid: std::process::id(),
        };

        let logger = dial(&formatter, socket.as_deref())?;
        Ok(Self {
            mask,
            formatter,
            socket,
            logger: Some(logger),
        })
    }

    pub fn mask(&self) -> RemoteMask {
        self.mask
    }

    pub fn tag(&self) -> &str {
        &self.formatter.process
    }

    /// Send one line at `severity`, reconnecting once on failure
    pub fn write(&mut self, severity: Severity, msg: &str) -> io::Result<()> {
        if let Some(logger) = self.logger.as_mut() {
            if send(logger, severity, msg).is_ok() {
                return Ok(());
            }
        }

        // Connection lost
        self.logger = None;
        let mut logger = dial(&self.formatter, self.socket.as_deref())?;
        let result = send(&mut logger, severity, msg);
        self.logger = Some(logger);
        result
    }
}

fn dial(formatter: &Formatter3164, socket: Option<&Path>) -> io::Result<Backend> {
    let logger = match socket {
        Some(path) => ::syslog::unix_custom(formatter.clone(), path),
        None => ::syslog::unix(formatter.clone()),
    };
    logger.map_err(transport_error)
}

fn send(logger: &mut Backend, severity: Severity, msg: &str) -> io::Result<()> {
    let sent = match severity {
        Severity::Emergency => logger.emerg(msg),
        Severity::Alert => logger.alert(msg),
        Severity::Critical => logger.crit(msg),
        Severity::Error => logger.err(msg),
        Severity::Warning => logger.warning(msg),
        Severity::Notice => logger.notice(msg),
        Severity::Info => logger.info(msg),
        Severity::Debug => logger.debug(msg),
    };
    sent.map_err(transport_error)
}

fn transport_error(err: impl Display) -> io::Error {
    io::Error::other(err.to_string())
}

fn facility_of(facility: Facility) -> ::syslog::Facility {
    use ::syslog::Facility as F;
    match facility {
        Facility::Kern => F::LOG_KERN,
        Facility::User => F::LOG_USER,
        Facility::Mail => F::LOG_MAIL,
        Facility::Daemon => F::LOG_DAEMON,
        Facility::Auth => F::LOG_AUTH,
        Facility::Syslog => F::LOG_SYSLOG,
        Facility::Lpr => F::LOG_LPR,
        Facility::News => F::LOG_NEWS,
        Facility::Uucp => F::LOG_UUCP,
        Facility::Cron => F::LOG_CRON,
        Facility::Local0 => F::LOG_LOCAL0,
        Facility::Local1 => F::LOG_LOCAL1,
        Facility::Local2 => F::LOG_LOCAL2,
        Facility::Local3 => F::LOG_LOCAL3,
        Facility::Local4 => F::LOG_LOCAL4,
        Facility::Local5 => F::LOG_LOCAL5,
        Facility::Local6 => F::LOG_LOCAL6,
        Facility::Local7 => F::LOG_LOCAL7,
    }
}

impl fmt::Debug for SyslogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyslogWriter")
            .field("mask", &self.mask)
            .field("tag", &self.formatter.process)
            .field("socket", &self.socket)
            .field("connected", &self.logger.is_some())
            .finish()
    }
}

impl RemoteSink for SyslogWriter {
    fn debug(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Debug, msg)
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Info, msg)
    }

    fn notice(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Notice, msg)
    }

    fn warning(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Warning, msg)
    }

    fn err(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Error, msg)
    }

    fn crit(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Critical, msg)
    }

    fn alert(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Alert, msg)
    }

    fn emerg(&mut self, msg: &str) -> io::Result<()> {
        self.write(Severity::Emergency, msg)
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
