//! Wall-clock capture for rendered lines
//!
//! A [`Timestamp`] holds one reading of the local clock together with the
//! abbreviation of the zone that was in effect at that instant. Both the
//! zone field and the date/time field of a line are derived from the same
//! reading, so they can never straddle a DST transition.

use chrono::{DateTime, Local, NaiveDateTime, Offset};
use chrono_tz::Tz;
use std::sync::OnceLock;

/// `DD/MM/YYYY HH:MM:SS.mmm`
pub const STAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S%.3f";

/// One local-time reading and its zone abbreviation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    local: NaiveDateTime,
    zone: String,
}

impl Timestamp {
    /// Read the clock once.
    #[must_use]
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    /// Build from a local reading, looking up the zone abbreviation for
    /// that instant.
    ///
    /// Falls back to the numeric offset (`+02:00`) where the system zone
    /// cannot be named.
    #[must_use]
    pub fn from_local(datetime: &DateTime<Local>) -> Self {
        let zone = zone_abbreviation(datetime)
            .unwrap_or_else(|| datetime.format("%:z").to_string());
        Self {
            local: datetime.naive_local(),
            zone,
        }
    }

    /// Build from explicit parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi_sink_logger::core::Timestamp;
    /// use chrono::NaiveDate;
    ///
    /// let local = NaiveDate::from_ymd_opt(2024, 3, 9)
    ///     .and_then(|d| d.and_hms_milli_opt(7, 5, 3, 42))
    ///     .unwrap();
    /// let ts = Timestamp::from_parts(local, "CET");
    /// assert_eq!(ts.stamp(), "09/03/2024 07:05:03.042");
    /// assert_eq!(ts.zone(), "CET");
    /// ```
    #[must_use]
    pub fn from_parts(local: NaiveDateTime, zone: impl Into<String>) -> Self {
        Self {
            local,
            zone: zone.into(),
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn local(&self) -> &NaiveDateTime {
        &self.local
    }

    /// Date and time rendered with [`STAMP_FORMAT`]
    #[must_use]
    pub fn stamp(&self) -> String {
        self.local.format(STAMP_FORMAT).to_string()
    }
}

/// Zone the process runs in, looked up once
fn system_zone() -> Option<Tz> {
    static ZONE: OnceLock<Option<Tz>> = OnceLock::new();
    *ZONE.get_or_init(|| {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| name.parse::<Tz>().ok())
    })
}

/// Abbreviation of the system zone at `datetime`.
///
/// `None` when the zone is unknown or disagrees with the offset chrono
/// used for the local reading (a `TZ` override, for instance).
fn zone_abbreviation(datetime: &DateTime<Local>) -> Option<String> {
    let tz = system_zone()?;
    let zoned = datetime.with_timezone(&tz);
    if zoned.offset().fix() != datetime.offset().fix() {
        return None;
    }
    Some(zoned.format("%Z").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_local() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_micro_opt(10, 30, 45, 123_456))
            .expect("valid datetime")
    }

    #[test]
    fn test_stamp_format() {
        let ts = Timestamp::from_parts(fixed_local(), "UTC");
        assert_eq!(ts.stamp(), "08/01/2025 10:30:45.123");
    }

    #[test]
    fn test_stamp_pads_fields() {
        let local = NaiveDate::from_ymd_opt(2025, 2, 3)
            .and_then(|d| d.and_hms_milli_opt(4, 5, 6, 7))
            .expect("valid datetime");
        let ts = Timestamp::from_parts(local, "UTC");
        assert_eq!(ts.stamp(), "03/02/2025 04:05:06.007");
    }

    #[test]
    fn test_now_has_zone() {
        let ts = Timestamp::now();
        assert!(!ts.zone().is_empty());
        assert_eq!(ts.stamp().len(), "08/01/2025 10:30:45.123".len());
    }

    #[test]
    fn test_zone_matches_local_offset() {
        let now = Local::now();
        let ts = Timestamp::from_local(&now);
        match system_zone() {
            Some(tz) if now.with_timezone(&tz).offset().fix() == now.offset().fix() => {
                assert_eq!(ts.zone(), now.with_timezone(&tz).format("%Z").to_string());
            }
            _ => assert_eq!(ts.zone(), now.format("%:z").to_string()),
        }
    }

    #[test]
    fn test_from_local_keeps_wall_clock() {
        let now = Local::now();
        let ts = Timestamp::from_local(&now);
        assert_eq!(*ts.local(), now.naive_local());
    }
}
