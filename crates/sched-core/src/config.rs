//! Conversion settings.

use crate::error::{Result, SchedError};
use serde::{Deserialize, Serialize};

/// Timezone every event is pinned to unless configured otherwise.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Domain appended to generated event UIDs.
pub const DEFAULT_UID_DOMAIN: &str = "wpi.edu";

/// Minutes before class start at which the reminder fires.
pub const DEFAULT_REMINDER_MINUTES: u32 = 15;

/// Settings for one conversion run, passed explicitly to the entry points.
///
/// Deserializes from partial JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// IANA timezone used for `DTSTART`/`DTEND` (`TZID=`).
    pub timezone: String,
    /// Domain suffix for event UIDs (`...@<uid_domain>`).
    pub uid_domain: String,
    /// Reminder lead time in minutes.
    pub reminder_minutes: u32,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            reminder_minutes: DEFAULT_REMINDER_MINUTES,
        }
    }
}

impl ConvertConfig {
    /// Check that the timezone is a known IANA identifier.
    ///
    /// # Errors
    /// Returns `SchedError::InvalidTimezone` otherwise.
    pub fn validate(&self) -> Result<()> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map(|_| ())
            .map_err(|_| SchedError::InvalidTimezone(self.timezone.clone()))
    }
}
