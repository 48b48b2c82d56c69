//! MS-DOS date/time packing for ZIP headers.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Packed 16-bit DOS time and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosDateTime {
    /// `hours << 11 | minutes << 5 | seconds / 2`
    pub time: u16,
    /// `(year - 1980) << 9 | month << 5 | day`
    pub date: u16,
}

impl DosDateTime {
    /// Earliest representable year.
    pub const MIN_YEAR: i32 = 1980;
    /// Latest representable year.
    pub const MAX_YEAR: i32 = 2107;

    /// Pack a timestamp. Years outside 1980..=2107 are clamped.
    #[must_use]
    pub fn from_datetime(at: &DateTime<Utc>) -> Self {
        let year = at.year().clamp(Self::MIN_YEAR, Self::MAX_YEAR);
        // Each component is range-limited by chrono, so the casts are exact.
        let years = (year - Self::MIN_YEAR) as u16;
        let time = (at.hour() as u16) << 11 | (at.minute() as u16) << 5 | (at.second() / 2) as u16;
        let date = years << 9 | (at.month() as u16) << 5 | at.day() as u16;
        Self { time, date }
    }
}

impl From<DateTime<Utc>> for DosDateTime {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_datetime(&at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pack_known_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 13, 45, 31).unwrap();
        let dos = DosDateTime::from_datetime(&at);
        assert_eq!(dos.time, (13 << 11) | (45 << 5) | 15);
        assert_eq!(dos.date, (44 << 9) | (3 << 5) | 15);
    }

    #[test]
    fn test_pack_clamps_early_years() {
        let at = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let dos = DosDateTime::from(at);
        assert_eq!(dos.date >> 9, 0);
        assert_eq!(dos.date & 0x1F, 1);
    }

    #[test]
    fn test_pack_clamps_late_years() {
        let at = Utc.with_ymd_and_hms(2200, 12, 31, 23, 59, 59).unwrap();
        let dos = DosDateTime::from(at);
        assert_eq!(dos.date >> 9, 127);
        assert_eq!(dos.time, (23 << 11) | (59 << 5) | 29);
    }
}
