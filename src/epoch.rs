//! Reference origins shared by every conversion. All of them are constants; nothing here is
//! ever mutated.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Days from 0001-01-01 (day 1 in chrono's proleptic Gregorian count) to 1970-01-01.
pub const EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_DAY: i64 = 86_400 * MILLIS_PER_SECOND;
pub const MICROS_PER_MILLI: i64 = 1_000;
pub const NANOS_PER_MILLI: u32 = 1_000_000;

/// 1970-01-01, day zero of the `date` logical type.
#[inline(always)]
pub fn epoch_date() -> NaiveDate {
    // chrono's default date is 1970-01-01.
    NaiveDate::default()
}

/// 1970-01-01T00:00:00 UTC, instant zero of the timestamp logical types.
#[inline(always)]
pub fn epoch_instant() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// 00:00:00.000, the origin of the time-of-day logical types.
#[inline(always)]
pub fn midnight() -> NaiveTime {
    epoch_instant().time()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_epoch_constants() {
        assert_eq!(epoch_date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(epoch_date().num_days_from_ce(), EPOCH_DAYS_FROM_CE);
        assert_eq!(epoch_instant().timestamp_millis(), 0);
        assert_eq!(epoch_instant().date_naive(), epoch_date());
        assert_eq!(midnight().num_seconds_from_midnight(), 0);
        assert_eq!(midnight().nanosecond(), 0);
    }
}
