//! One conversion per logical type. The microsecond pairs share their decode direction: the
//! lossy variant holds the base conversion and delegates to it.

mod date;
mod time_micros;
mod time_millis;
mod timestamp_micros;
mod timestamp_millis;

pub use date::DateConversion;
pub use time_micros::{LossyTimeMicrosConversion, TimeMicrosConversion};
pub use time_millis::TimeMillisConversion;
pub use timestamp_micros::{LossyTimestampMicrosConversion, TimestampMicrosConversion};
pub use timestamp_millis::TimestampMillisConversion;

use crate::epoch::{midnight, MILLIS_PER_DAY, MILLIS_PER_SECOND, NANOS_PER_MILLI};
use chrono::{NaiveTime, TimeDelta, Timelike};

pub static DATE: DateConversion = DateConversion;
pub static TIME_MILLIS: TimeMillisConversion = TimeMillisConversion;
pub static TIME_MICROS: TimeMicrosConversion = TimeMicrosConversion;
pub static LOSSY_TIME_MICROS: LossyTimeMicrosConversion = LossyTimeMicrosConversion::new();
pub static TIMESTAMP_MILLIS: TimestampMillisConversion = TimestampMillisConversion;
pub static TIMESTAMP_MICROS: TimestampMicrosConversion = TimestampMicrosConversion;
pub static LOSSY_TIMESTAMP_MICROS: LossyTimestampMicrosConversion =
    LossyTimestampMicrosConversion::new();

/// Midnight plus `millis`, wrapping modulo one day so every count maps to a time-of-day.
#[inline(always)]
fn time_from_millis_of_day(millis: i64) -> NaiveTime {
    midnight() + TimeDelta::milliseconds(millis.rem_euclid(MILLIS_PER_DAY))
}

/// Whole milliseconds since midnight, in `0..MILLIS_PER_DAY`. A leap second counts as the last
/// millisecond of the second it extends.
#[inline(always)]
fn millis_of_day(time: &NaiveTime) -> i64 {
    let nanos = time.nanosecond().min(999_999_999);
    i64::from(time.num_seconds_from_midnight()) * MILLIS_PER_SECOND
        + i64::from(nanos / NANOS_PER_MILLI)
}
