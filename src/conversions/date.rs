use crate::conversion::{conversion_identity, Conversion};
use crate::epoch::EPOCH_DAYS_FROM_CE;
use crate::error::{error, ErrorKind};
use crate::value::DomainValue;
use crate::wire::WireValue;
use crate::Result;
use chrono::{Datelike, NaiveDate};

/// `date`: a calendar date stored as a 32-bit count of days since 1970-01-01.
#[derive(Copy, Clone, Debug, Default)]
pub struct DateConversion;

impl DateConversion {
    /// Whole days from 1970-01-01 to `date`, negative before the epoch. Every chrono date fits.
    #[inline(always)]
    pub fn to_days(date: &NaiveDate) -> i32 {
        date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
    }

    /// 1970-01-01 plus `days`. Errors only past chrono's ~±262 000 year range.
    #[inline(always)]
    pub fn from_days(days: i32) -> Result<NaiveDate> {
        days.checked_add(EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| error(ErrorKind::OutOfRange, "day count outside the date range"))
    }
}

impl Conversion for DateConversion {
    conversion_identity!("date", Date, Int);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        Self::from_days(wire.as_int()?).map(DomainValue::Date)
    }

    fn encode(&self, value: &DomainValue) -> Result<WireValue> {
        Ok(WireValue::Int(Self::to_days(value.as_date()?)))
    }
}
