use super::{millis_of_day, time_from_millis_of_day};
use crate::conversion::{conversion_identity, Conversion};
use crate::value::DomainValue;
use crate::wire::WireValue;
use crate::Result;
use chrono::NaiveTime;

/// `time-millis`: a time-of-day stored as a 32-bit count of milliseconds since midnight.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimeMillisConversion;

impl TimeMillisConversion {
    /// Milliseconds since midnight, in `0..86_400_000`. Sub-millisecond detail is truncated.
    #[inline(always)]
    pub fn to_millis(time: &NaiveTime) -> i32 {
        // < 86_400_000 always fits.
        millis_of_day(time) as i32
    }

    /// Midnight plus `millis`. Counts outside a day wrap around it.
    #[inline(always)]
    pub fn from_millis(millis: i32) -> NaiveTime {
        time_from_millis_of_day(i64::from(millis))
    }
}

impl Conversion for TimeMillisConversion {
    conversion_identity!("time-millis", TimeOfDay, Int);

    fn decode(&self, wire: WireValue) -> Result<DomainValue> {
        Ok(DomainValue::TimeOfDay(Self::from_millis(wire.as_int()?)))
    }

    fn encode(&self, value: &DomainValue) -> Result<WireValue> {
        Ok(WireValue::Int(Self::to_millis(value.as_time_of_day()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::MILLIS_PER_DAY;
    use crate::error::ErrorKind;
    use crate::schema::{Primitive, Schema};
    use alloc::vec::Vec;

    fn hms_milli(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
        NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(TimeMillisConversion::from_millis(3_661_000), hms_milli(1, 1, 1, 0));
        assert_eq!(TimeMillisConversion::to_millis(&hms_milli(1, 1, 1, 0)), 3_661_000);
        assert_eq!(TimeMillisConversion::from_millis(0), crate::epoch::midnight());
        assert_eq!(
            TimeMillisConversion::to_millis(&hms_milli(23, 59, 59, 999)),
            86_399_999
        );
    }

    #[test]
    fn test_round_trip() {
        let millis: Vec<u32> = crate::random_data(1000);
        for m in millis.into_iter().map(|m| (m % MILLIS_PER_DAY as u32) as i32) {
            let time = TimeMillisConversion::from_millis(m);
            assert_eq!(TimeMillisConversion::to_millis(&time), m, "failed for {m}");
            let millis = TimeMillisConversion::to_millis(&time);
            assert_eq!(TimeMillisConversion::from_millis(millis), time);
        }
    }

    #[test]
    fn test_truncates_sub_millisecond() {
        let t = NaiveTime::from_hms_micro_opt(1, 1, 1, 999).unwrap();
        assert_eq!(TimeMillisConversion::to_millis(&t), 3_661_000);
    }

    #[test]
    fn test_out_of_day_wraps() {
        assert_eq!(TimeMillisConversion::from_millis(-1), hms_milli(23, 59, 59, 999));
        assert_eq!(
            TimeMillisConversion::from_millis(86_400_000 + 5),
            hms_milli(0, 0, 0, 5)
        );
        // Never fails.
        let _ = TimeMillisConversion::from_millis(i32::MIN);
        let _ = TimeMillisConversion::from_millis(i32::MAX);
    }

    #[test]
    fn test_trait() {
        let c = TimeMillisConversion;
        assert_eq!(
            c.recommended_schema(),
            Schema::new(Primitive::Int).with_logical_type("time-millis")
        );
        let v = DomainValue::TimeOfDay(hms_milli(12, 0, 0, 0));
        let wire = c.encode(&v).unwrap();
        assert_eq!(wire, WireValue::Int(43_200_000));
        assert_eq!(c.decode(wire), Ok(v));
        assert_eq!(
            c.decode(WireValue::Long(1)).unwrap_err().kind(),
            ErrorKind::WireWidth
        );
    }
}
