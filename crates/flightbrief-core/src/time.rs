//! Date, clock and duration formatting for the brief.
//!
//! [`UtcInstant`] is an immutable point in time parsed from SimBrief's
//! unix-second strings. Offset arithmetic always yields a new value, so one
//! parsed instant can safely feed several display fields.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};

use crate::{
    error::{BriefError, FieldResultExt, Result},
    models::numeric::parse_seconds,
};

/// Separator used by [`hours_minutes`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// An absolute instant, always displayed in UTC unless shifted explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UtcInstant(Timestamp);

impl UtcInstant {
    /// Parses a unix-epoch-seconds string. `field` names the source field in
    /// any resulting error.
    pub fn parse(field: &str, text: &str) -> Result<Self> {
        let seconds = parse_seconds(field, text)?;
        Timestamp::from_second(seconds)
            .map(Self)
            .field_context(field)
    }

    /// Returns a new instant `seconds` later.
    pub fn add_offset(&self, seconds: i64) -> Result<Self> {
        self.0
            .checked_add(SignedDuration::from_secs(seconds))
            .map(Self)
            .map_err(|e| {
                BriefError::invalid_input("offset")
                    .with_reason(format!("cannot shift {} by {seconds}s: {e}", self.0))
            })
    }

    /// Returns a new instant `seconds` earlier.
    pub fn subtract_offset(&self, seconds: i64) -> Result<Self> {
        let negated = seconds.checked_neg().ok_or_else(|| {
            BriefError::invalid_input("offset").with_reason(format!("{seconds}s out of range"))
        })?;
        self.add_offset(negated)
    }

    fn utc(&self) -> Zoned {
        self.0.to_zoned(TimeZone::UTC)
    }

    /// `DDMMMYY`, e.g. `01OCT23`.
    pub fn abbreviated_date(&self) -> String {
        self.utc().strftime("%d%b%y").to_string().to_uppercase()
    }

    /// `DD/MM/YY`, e.g. `01/10/23`.
    pub fn abbreviated_slashed_date(&self) -> String {
        self.utc().strftime("%d/%m/%y").to_string()
    }

    /// `HH{separator}MM` in UTC.
    pub fn utc_clock(&self, separator: &str) -> String {
        let zoned = self.utc();
        format!("{:02}{separator}{:02}", zoned.hour(), zoned.minute())
    }

    /// `HH:MM` at a fixed offset of `hour_offset` hours from UTC.
    pub fn local_clock(&self, hour_offset: f64) -> Result<String> {
        let seconds = (hour_offset * 3600.0).round() as i64;
        Ok(self.add_offset(seconds)?.utc_clock(":"))
    }
}

impl fmt::Display for UtcInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.utc().strftime("%Y-%m-%d %H:%M:%S UTC"))
    }
}

/// Formats a duration as truncated hours and minutes, e.g. `02.42`.
///
/// ```rust
/// use flightbrief_core::time::to_hours_minutes;
///
/// assert_eq!(to_hours_minutes(125, "."), "00.02");
/// assert_eq!(to_hours_minutes(3661, ":"), "01:01");
/// ```
pub fn to_hours_minutes(total_seconds: i64, separator: &str) -> String {
    let hours = total_seconds.div_euclid(3600);
    let minutes = total_seconds.rem_euclid(3600) / 60;
    format!("{hours:02}{separator}{minutes:02}")
}

/// [`to_hours_minutes`] with the default `.` separator.
pub fn hours_minutes(total_seconds: i64) -> String {
    to_hours_minutes(total_seconds, DEFAULT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-10-01 09:00:00 UTC
    const SCHED_OUT: &str = "1696150800";

    #[test]
    fn test_to_hours_minutes_truncates() {
        assert_eq!(to_hours_minutes(125, "."), "00.02");
        assert_eq!(to_hours_minutes(3661, ":"), "01:01");
        assert_eq!(to_hours_minutes(3599, ""), "0059");
        assert_eq!(to_hours_minutes(0, "."), "00.00");
        assert_eq!(hours_minutes(9720), "02.42");
        assert_eq!(to_hours_minutes(40 * 3600, "."), "40.00");
    }

    #[test]
    fn test_parse_and_display() {
        let instant = UtcInstant::parse("times.sched_out", SCHED_OUT).unwrap();
        assert_eq!(instant.to_string(), "2023-10-01 09:00:00 UTC");
    }

    #[test]
    fn test_parse_failure_names_field() {
        let err = UtcInstant::parse("times.sched_out", "tomorrow").unwrap_err();
        assert_eq!(err.field(), Some("times.sched_out"));

        let err = UtcInstant::parse("times.sched_in", "").unwrap_err();
        assert_eq!(err.field(), Some("times.sched_in"));
    }

    #[test]
    fn test_date_formats() {
        let instant = UtcInstant::parse("api_params.date", "1696118400").unwrap();
        assert_eq!(instant.abbreviated_date(), "01OCT23");
        assert_eq!(instant.abbreviated_slashed_date(), "01/10/23");
    }

    #[test]
    fn test_utc_clock_separators() {
        let instant = UtcInstant::parse("times.sched_out", SCHED_OUT).unwrap();
        assert_eq!(instant.utc_clock(":"), "09:00");
        assert_eq!(instant.utc_clock(""), "0900");
    }

    #[test]
    fn test_local_clock_offsets() {
        let instant = UtcInstant::parse("times.sched_out", SCHED_OUT).unwrap();
        assert_eq!(instant.local_clock(11.0).unwrap(), "20:00");
        assert_eq!(instant.local_clock(-9.5).unwrap(), "23:30");
        assert_eq!(instant.local_clock(5.75).unwrap(), "14:45");
    }

    #[test]
    fn test_offsets_return_new_values() {
        let sched_out = UtcInstant::parse("times.sched_out", SCHED_OUT).unwrap();

        let sign_on = sched_out.subtract_offset(3600).unwrap();
        let expiry = sched_out.add_offset(11 * 3600).unwrap();

        assert_eq!(sign_on.utc_clock(":"), "08:00");
        assert_eq!(expiry.utc_clock(":"), "20:00");
        // The source instant is untouched by either shift.
        assert_eq!(sched_out.utc_clock(":"), "09:00");
    }

    #[test]
    fn test_offset_overflow_is_error() {
        let instant = UtcInstant::parse("times.sched_out", SCHED_OUT).unwrap();
        assert!(instant.add_offset(i64::MAX / 2).is_err());
        assert!(instant.subtract_offset(i64::MIN).is_err());
    }
}
