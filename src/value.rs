use crate::error::{err, ErrorKind};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// The three semantic kinds a logical type can map to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Year/month/day without a time-of-day or zone.
    Date,
    /// Hour/minute/second/sub-second without a date or zone.
    TimeOfDay,
    /// Absolute point on the UTC timeline.
    Instant,
}

/// An in-memory date/time value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DomainValue {
    Date(NaiveDate),
    TimeOfDay(NaiveTime),
    Instant(DateTime<Utc>),
}

impl DomainValue {
    pub fn kind(&self) -> DomainKind {
        match self {
            Self::Date(_) => DomainKind::Date,
            Self::TimeOfDay(_) => DomainKind::TimeOfDay,
            Self::Instant(_) => DomainKind::Instant,
        }
    }

    pub fn as_date(&self) -> Result<&NaiveDate> {
        match self {
            Self::Date(d) => Ok(d),
            _ => err(ErrorKind::DomainKind, "expected a calendar date"),
        }
    }

    pub fn as_time_of_day(&self) -> Result<&NaiveTime> {
        match self {
            Self::TimeOfDay(t) => Ok(t),
            _ => err(ErrorKind::DomainKind, "expected a time-of-day"),
        }
    }

    pub fn as_instant(&self) -> Result<&DateTime<Utc>> {
        match self {
            Self::Instant(i) => Ok(i),
            _ => err(ErrorKind::DomainKind, "expected an instant"),
        }
    }
}

macro_rules! impl_domain {
    ($t:ty, $variant:ident, $as:ident) => {
        impl From<$t> for DomainValue {
            fn from(v: $t) -> Self {
                Self::$variant(v)
            }
        }

        impl TryFrom<DomainValue> for $t {
            type Error = Error;

            fn try_from(value: DomainValue) -> Result<Self> {
                value.$as().copied()
            }
        }
    };
}

impl_domain!(NaiveDate, Date, as_date);
impl_domain!(NaiveTime, TimeOfDay, as_time_of_day);
impl_domain!(DateTime<Utc>, Instant, as_instant);
