//! Logger configuration
//!
//! [`LoggerConfig`] bundles the constructor parameters so hosts can embed
//! them in their own configuration; this crate does not read config files.

use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Syslog facility codes (`LOG_*` from `<syslog.h>`, already shifted).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Facility {
    Kern = 0,
    User = 1 << 3,
    Mail = 2 << 3,
    Daemon = 3 << 3,
    Auth = 4 << 3,
    Syslog = 5 << 3,
    Lpr = 6 << 3,
    News = 7 << 3,
    Uucp = 8 << 3,
    Cron = 9 << 3,
    Local0 = 16 << 3,
    Local1 = 17 << 3,
    Local2 = 18 << 3,
    Local3 = 19 << 3,
    Local4 = 20 << 3,
    Local5 = 21 << 3,
    Local6 = 22 << 3,
    Local7 = 23 << 3,
}

impl Facility {
    pub const ALL: [Facility; 18] = [
        Facility::Kern,
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    /// Case-insensitive lookup by facility name (`"daemon"`, `"LOCAL3"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| *f as i32 == code)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Lpr => "lpr",
            Self::News => "news",
            Self::Uucp => "uucp",
            Self::Cron => "cron",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SEVERITY_MASK: i32 = 0x07;
const FACILITY_MASK: i32 = 0x3f8;

/// Facility and default severity handed to the remote transport when it
/// connects, packed the way syslog packs a priority (`facility | severity`).
///
/// Zero means "unset" and resolves to `Info | Syslog`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteMask(i32);

impl RemoteMask {
    pub const UNSET: RemoteMask = RemoteMask(0);

    pub const fn new(facility: Facility, severity: Severity) -> Self {
        Self(facility as i32 | severity as i32)
    }

    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> i32 {
        self.0
    }

    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// The mask a transport should use: unset resolves to `Info | Syslog`.
    pub const fn resolved(self) -> Self {
        if self.is_unset() {
            Self::new(Facility::Syslog, Severity::Info)
        } else {
            self
        }
    }

    /// Facility part; unrecognised bits fall back to `User`.
    pub fn facility(&self) -> Facility {
        Facility::from_code(self.0 & FACILITY_MASK).unwrap_or(Facility::User)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_code(self.0 & SEVERITY_MASK).unwrap_or_default()
    }

    /// Priority value for a line of `severity` under this mask's facility
    pub fn priority_for(&self, severity: Severity) -> i32 {
        (self.0 & FACILITY_MASK) | severity as i32
    }
}

impl From<(Facility, Severity)> for RemoteMask {
    fn from((facility, severity): (Facility, Severity)) -> Self {
        Self::new(facility, severity)
    }
}

/// Constructor parameters for [`Logger`](crate::core::Logger)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Tag under which the remote sink records lines
    pub app_name: String,
    /// Log file; `None` or an empty path means no durable sink
    pub file_path: Option<PathBuf>,
    pub enable_remote: bool,
    pub remote_mask: RemoteMask,
    /// Write to stdout/stderr; turning this off leaves file and remote sinks untouched
    pub primary_output: bool,
}

impl LoggerConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::default()
        }
    }

    /// The file path when one is configured and non-empty
    pub fn durable_path(&self) -> Option<&Path> {
        self.file_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            file_path: None,
            enable_remote: false,
            remote_mask: RemoteMask::UNSET,
            primary_output: true,
        }
    }
}
