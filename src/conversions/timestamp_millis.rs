use crate::conversion::{conversion_identity, Conversion};
use crate::error::{error, ErrorKind};
use crate::value::DomainValue;
use crate::wire::WireValue;
use crate::Result;
use chrono::{DateTime, Utc};

/// `timestamp-millis`: an instant stored as a 64-bit count of milliseconds since
/// 1970-01-01T00:00:00 UTC.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimestampMillisConversion;

impl TimestampMillisConversion {
    /// Signed milliseconds since the epoch instant. Sub-millisecond detail is floored, so before
    /// the epoch it rounds toward the past: `1969-12-31T23:59:59.999500Z` is `-1`, not `0`.
    #[inline(always)]
    pub fn to_millis(instant: &DateTime<Utc>) -> i64 {
        instant.timestamp_millis()
    }

    /// The epoch instant plus `millis`, in UTC. Errors only past chrono's ~±262 000 year range.
    #[inline(always)]
    pub fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| {
                error(
                    ErrorKind::OutOfRange,
                    "millisecond count outside the instant range",
                )
            })
    }
}

impl Conversion for TimestampMillisConversion {
    conversion_identity!("timestamp-millis", Instant, Long);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        Self::from_millis(wire.as_long()?).map(DomainValue::Instant)
    }

    fn encode(&self, value: &DomainValue) -> Result<WireValue> {
        Ok(WireValue::Long(Self::to_millis(value.as_instant()?)))
    }
}
