//! Severity definitions

use super::remote_sink::RemoteSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

/// Label rendered for codes outside the eight syslog severities.
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// The eight syslog severities, carrying their RFC 5424 numeric codes.
///
/// Lower codes are more severe, so `Emergency < Debug` in the derived order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

/// Primary stream a line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Function writing one line through a remote sink method.
pub type RemoteWrite = fn(&mut dyn RemoteSink, &str) -> io::Result<()>;

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRIT",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Severity::Emergency),
            1 => Some(Severity::Alert),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            5 => Some(Severity::Notice),
            6 => Some(Severity::Info),
            7 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Error and worse go to stderr, everything else to stdout.
    pub fn stream(&self) -> Stream {
        match self {
            Severity::Debug | Severity::Info | Severity::Notice | Severity::Warning => {
                Stream::Stdout
            }
            Severity::Error | Severity::Critical | Severity::Alert | Severity::Emergency => {
                Stream::Stderr
            }
        }
    }

    /// Remote sink method receiving lines of this severity
    pub fn remote_writer(&self) -> RemoteWrite {
        match self {
            Severity::Debug => |sink: &mut dyn RemoteSink, msg: &str| sink.debug(msg),
            Severity::Info => |sink: &mut dyn RemoteSink, msg: &str| sink.info(msg),
            Severity::Notice => |sink: &mut dyn RemoteSink, msg: &str| sink.notice(msg),
            Severity::Warning => |sink: &mut dyn RemoteSink, msg: &str| sink.warning(msg),
            Severity::Error => |sink: &mut dyn RemoteSink, msg: &str| sink.err(msg),
            Severity::Critical => |sink: &mut dyn RemoteSink, msg: &str| sink.crit(msg),
            Severity::Alert => |sink: &mut dyn RemoteSink, msg: &str| sink.alert(msg),
            Severity::Emergency => |sink: &mut dyn RemoteSink, msg: &str| sink.emerg(msg),
        }
    }
}

/// Translate a raw syslog severity code into its display label.
///
/// Total over `i32`: anything that is not one of the eight codes,
/// including codes with facility bits set, renders as `"UNKNOWN"`.
pub fn label_of(code: i32) -> &'static str {
    Severity::from_code(code).map_or(UNKNOWN_LABEL, |s| s.label())
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERG" | "EMERGENCY" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

/// Dispatch level: a formatted severity or the raw pass-through level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Formatted(Severity),
    /// Unformatted print; undecorated, stdout, remote info.
    Raw,
}

impl Level {
    pub fn stream(&self) -> Stream {
        match self {
            Level::Formatted(severity) => severity.stream(),
            Level::Raw => Stream::Stdout,
        }
    }

    pub fn remote_writer(&self) -> RemoteWrite {
        match self {
            Level::Formatted(severity) => severity.remote_writer(),
            Level::Raw => Severity::Info.remote_writer(),
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        Level::Formatted(severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MethodRecorder {
        calls: Vec<&'static str>,
    }

    impl RemoteSink for MethodRecorder {
        fn debug(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("debug");
            Ok(())
        }
        fn info(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("info");
            Ok(())
        }
        fn notice(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("notice");
            Ok(())
        }
        fn warning(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("warning");
            Ok(())
        }
        fn err(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("err");
            Ok(())
        }
        fn crit(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("crit");
            Ok(())
        }
        fn alert(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("alert");
            Ok(())
        }
        fn emerg(&mut self, _msg: &str) -> io::Result<()> {
            self.calls.push("emerg");
            Ok(())
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Severity::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["EMERG", "ALERT", "CRIT", "ERROR", "WARNING", "NOTICE", "INFO", "DEBUG"]
        );
    }

    #[test]
    fn test_label_of_unknown_codes() {
        assert_eq!(label_of(4), "WARNING");
        assert_eq!(label_of(8), "UNKNOWN");
        assert_eq!(label_of(-1), "UNKNOWN");
        // LOG_INFO | LOG_USER carries facility bits
        assert_eq!(label_of(6 | (1 << 3)), "UNKNOWN");
    }

    #[test]
    fn test_code_roundtrip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_code(severity.code() as i32), Some(severity));
        }
    }

    #[test]
    fn test_stream_routing() {
        assert_eq!(Severity::Debug.stream(), Stream::Stdout);
        assert_eq!(Severity::Info.stream(), Stream::Stdout);
        assert_eq!(Severity::Notice.stream(), Stream::Stdout);
        assert_eq!(Severity::Warning.stream(), Stream::Stdout);
        assert_eq!(Severity::Error.stream(), Stream::Stderr);
        assert_eq!(Severity::Critical.stream(), Stream::Stderr);
        assert_eq!(Severity::Alert.stream(), Stream::Stderr);
        assert_eq!(Severity::Emergency.stream(), Stream::Stderr);
        assert_eq!(Level::Raw.stream(), Stream::Stdout);
    }

    #[test]
    fn test_remote_writer_routing() {
        let mut sink = MethodRecorder::default();
        for severity in Severity::ALL {
            severity.remote_writer()(&mut sink, "line").unwrap();
        }
        Level::Raw.remote_writer()(&mut sink, "raw").unwrap();

        assert_eq!(
            sink.calls,
            ["emerg", "alert", "crit", "err", "warning", "notice", "info", "debug", "info"]
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("CRIT".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("err".parse::<Severity>(), Ok(Severity::Error));
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_ordering_follows_codes() {
        assert!(Severity::Emergency < Severity::Debug);
        assert_eq!(Severity::default(), Severity::Info);
    }
}
