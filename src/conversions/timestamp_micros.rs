use super::TimestampMillisConversion;
use crate::conversion::{conversion_identity, Conversion};
use crate::epoch::MICROS_PER_MILLI;
use crate::error::{err, ErrorKind};
use crate::value::DomainValue;
use crate::wire::WireValue;
use crate::Result;
use chrono::{DateTime, Utc};

/// `timestamp-micros`, decode-only. The 64-bit microsecond count is read at millisecond
/// precision. Use [`LossyTimestampMicrosConversion`] to write.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimestampMicrosConversion;

impl TimestampMicrosConversion {
    /// The epoch instant plus `micros / 1000` milliseconds (truncated toward zero), in UTC.
    #[inline(always)]
    pub fn from_micros(micros: i64) -> Result<DateTime<Utc>> {
        TimestampMillisConversion::from_millis(micros / MICROS_PER_MILLI)
    }
}

impl Conversion for TimestampMicrosConversion {
    conversion_identity!("timestamp-micros", Instant, Long);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        Self::from_micros(wire.as_long()?).map(DomainValue::Instant)
    }

    fn encode(&self, _: &DomainValue) -> Result<WireValue> {
        err(ErrorKind::Unsupported, "timestamp-micros is decode-only")
    }

    fn supports_encode(&self) -> bool {
        false
    }
}

/// `timestamp-micros` that can also write, by discarding sub-millisecond detail: the written
/// count is always a multiple of 1000. Decoding is [`TimestampMicrosConversion`]'s.
#[derive(Copy, Clone, Debug, Default)]
pub struct LossyTimestampMicrosConversion {
    base: TimestampMicrosConversion,
}

impl LossyTimestampMicrosConversion {
    pub const fn new() -> Self {
        Self {
            base: TimestampMicrosConversion,
        }
    }

    /// `1000 * millis_since_epoch(instant)`.
    #[inline(always)]
    pub fn to_micros(instant: &DateTime<Utc>) -> i64 {
        // chrono's instant range is narrow enough that this can't overflow.
        TimestampMillisConversion::to_millis(instant) * MICROS_PER_MILLI
    }
}

impl Conversion for LossyTimestampMicrosConversion {
    conversion_identity!("timestamp-micros", Instant, Long);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        self.base.decode(wire)
    }

    fn encode(&self, value: &DomainValue) -> Result<WireValue> {
        Ok(WireValue::Long(Self::to_micros(value.as_instant()?)))
    }
}
