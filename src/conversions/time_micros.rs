use super::{millis_of_day, time_from_millis_of_day};
use crate::conversion::{conversion_identity, Conversion};
use crate::epoch::MICROS_PER_MILLI;
use crate::error::{err, ErrorKind};
use crate::value::DomainValue;
use crate::wire::WireValue;
use crate::Result;
use chrono::NaiveTime;

/// `time-micros`, decode-only. The 64-bit microsecond count is read at millisecond precision.
/// Use [`LossyTimeMicrosConversion`] to write.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimeMicrosConversion;

impl TimeMicrosConversion {
    /// Midnight plus `micros / 1000` milliseconds (truncated toward zero). The remainder is
    /// dropped and counts outside a day wrap around it.
    #[inline(always)]
    pub fn from_micros(micros: i64) -> NaiveTime {
        time_from_millis_of_day(micros / MICROS_PER_MILLI)
    }
}

impl Conversion for TimeMicrosConversion {
    conversion_identity!("time-micros", TimeOfDay, Long);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        Ok(DomainValue::TimeOfDay(Self::from_micros(wire.as_long()?)))
    }

    fn encode(&self, _: &DomainValue) -> Result<WireValue> {
        err(ErrorKind::Unsupported, "time-micros is decode-only")
    }

    fn supports_encode(&self) -> bool {
        false
    }
}

/// `time-micros` that can also write, by discarding sub-millisecond detail: the written count
/// is always a multiple of 1000, so `decode(encode(t))` loses whatever `t` had below a
/// millisecond. Decoding is [`TimeMicrosConversion`]'s.
#[derive(Copy, Clone, Debug, Default)]
pub struct LossyTimeMicrosConversion {
    base: TimeMicrosConversion,
}

impl LossyTimeMicrosConversion {
    pub const fn new() -> Self {
        Self {
            base: TimeMicrosConversion,
        }
    }

    /// `1000 * millis_since_midnight(time)`.
    #[inline(always)]
    pub fn to_micros(time: &NaiveTime) -> i64 {
        millis_of_day(time) * MICROS_PER_MILLI
    }
}

impl Conversion for LossyTimeMicrosConversion {
    conversion_identity!("time-micros", TimeOfDay, Long);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        self.base.decode(wire)
    }

    fn encode(&self, value: &DomainValue) -> Result<WireValue> {
        Ok(WireValue::Long(Self::to_micros(value.as_time_of_day()?)))
    }
}
