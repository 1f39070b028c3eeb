use crate::conversions::DateConversion;
use crate::epoch::EPOCH_DAYS_FROM_CE;
use crate::error::{error, ErrorKind};
use crate::ext::{impl_bridge, ConvertFrom};
use crate::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use time::{Date, OffsetDateTime, Time};

/// Julian day number of 1970-01-01.
const EPOCH_JULIAN_DAY: i32 = 2_440_588;

impl_bridge!(Date, NaiveDate);
impl_bridge!(Time, NaiveTime);
impl_bridge!(OffsetDateTime, DateTime<Utc>);

impl ConvertFrom<Date> for NaiveDate {
    fn convert_from(value: Date) -> Result<Self> {
        (value.to_julian_day() - EPOCH_JULIAN_DAY)
            .checked_add(EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| error(ErrorKind::OutOfRange, "date outside chrono's range"))
    }
}

impl ConvertFrom<NaiveDate> for Date {
    fn convert_from(value: NaiveDate) -> Result<Self> {
        Date::from_julian_day(DateConversion::to_days(&value) + EPOCH_JULIAN_DAY)
            .map_err(|_| error(ErrorKind::OutOfRange, "date outside the time crate's range"))
    }
}

impl ConvertFrom<Time> for NaiveTime {
    fn convert_from(value: Time) -> Result<Self> {
        let (hour, minute, second, nanosecond) = value.as_hms_nano();
        NaiveTime::from_hms_nano_opt(hour.into(), minute.into(), second.into(), nanosecond)
            .ok_or_else(|| error(ErrorKind::OutOfRange, "invalid time-of-day"))
    }
}

impl ConvertFrom<NaiveTime> for Time {
    fn convert_from(value: NaiveTime) -> Result<Self> {
        // The time crate has no leap seconds; fold them into the preceding second.
        Time::from_hms_nano(
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
            value.nanosecond().min(999_999_999),
        )
        .map_err(|_| error(ErrorKind::OutOfRange, "invalid time-of-day"))
    }
}

impl ConvertFrom<OffsetDateTime> for DateTime<Utc> {
    fn convert_from(value: OffsetDateTime) -> Result<Self> {
        // The unix timestamp doesn't depend on the offset, so this normalizes to UTC.
        DateTime::<Utc>::from_timestamp(value.unix_timestamp(), value.nanosecond())
            .ok_or_else(|| error(ErrorKind::OutOfRange, "instant outside chrono's range"))
    }
}

impl ConvertFrom<DateTime<Utc>> for OffsetDateTime {
    fn convert_from(value: DateTime<Utc>) -> Result<Self> {
        let nanos = i128::from(value.timestamp()) * 1_000_000_000
            + i128::from(value.timestamp_subsec_nanos().min(999_999_999));
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|_| error(ErrorKind::OutOfRange, "instant outside the time crate's range"))
    }
}
