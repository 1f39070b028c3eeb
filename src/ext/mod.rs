//! Bridges that let values from other date/time crates go through the chrono-based
//! conversions.

#[cfg(feature = "time")]
mod time;

/// Like [`TryFrom`] but we can implement it between two foreign types.
#[allow(unused)]
pub(crate) trait ConvertFrom<T>: Sized {
    fn convert_from(value: T) -> crate::Result<Self>;
}

/// Implements `TryFrom` in both directions between `$foreign` and [`DomainValue`] by way of
/// the chrono type `$chrono`.
///
/// [`DomainValue`]: crate::DomainValue
#[allow(unused)]
macro_rules! impl_bridge {
    ($foreign:ty, $chrono:ty) => {
        impl TryFrom<$foreign> for crate::DomainValue {
            type Error = crate::Error;

            fn try_from(value: $foreign) -> crate::Result<Self> {
                <$chrono as crate::ext::ConvertFrom<$foreign>>::convert_from(value).map(Into::into)
            }
        }

        impl TryFrom<crate::DomainValue> for $foreign {
            type Error = crate::Error;

            fn try_from(value: crate::DomainValue) -> crate::Result<Self> {
                let value = <$chrono>::try_from(value)?;
                <$foreign as crate::ext::ConvertFrom<$chrono>>::convert_from(value)
            }
        }
    };
}
#[allow(unused)]
pub(crate) use impl_bridge;
