//! Clock and timezone handling for facility-local time.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Source of "now" for the facility.
///
/// `now_utc` drives stored timestamps; `local_now` drives the shift-window
/// rules, which are defined in facility-local time.
pub trait FacilityClock: Send + Sync {
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
    /// Current facility-local date and time.
    fn local_now(&self) -> NaiveDateTime;
}

/// System clock converting to a named IANA timezone.
#[derive(Debug, Clone)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Resolve `zone` against the IANA database.
    ///
    /// Unknown zone names fall back to UTC rather than failing, so a
    /// misconfigured facility keeps running with slightly-off shift windows.
    pub fn for_zone(zone: &str) -> Self {
        match zone.parse::<Tz>() {
            Ok(tz) => Self { tz },
            Err(_) => {
                tracing::warn!("unknown timezone `{zone}`, falling back to UTC");
                Self { tz: Tz::UTC }
            }
        }
    }

    /// The resolved timezone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl FacilityClock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Clock pinned to a single instant, for tests and replay.
#[derive(Debug, Clone)]
pub struct FixedClock {
    utc: DateTime<Utc>,
    local: NaiveDateTime,
}

impl FixedClock {
    /// Clock reporting `utc` and the given facility-local datetime.
    pub fn new(utc: DateTime<Utc>, local: NaiveDateTime) -> Self {
        Self { utc, local }
    }
}

impl FacilityClock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.utc
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local
    }
}
