use crate::schema::{Primitive, Schema};
use crate::value::{DomainKind, DomainValue};
use crate::wire::{Width, WireValue};
use crate::Result;

/// Immutable identity of a [`Conversion`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub domain_kind: DomainKind,
    pub width: Width,
    pub logical_type_name: &'static str,
    pub recommended_schema: Schema,
}

/// Two-sided mapping between a logical type's wire integer and an in-memory date/time value.
///
/// Implementations are stateless, so a single `static` instance can be shared across threads.
pub trait Conversion: Send + Sync {
    /// Name of the logical type this conversion serves, e.g. `"date"`.
    fn logical_type_name(&self) -> &'static str;

    fn domain_kind(&self) -> DomainKind;

    /// Primitive the logical type annotates.
    fn primitive(&self) -> Primitive;

    /// Schema a writer should use when none is given explicitly.
    fn recommended_schema(&self) -> Schema {
        Schema::new(self.primitive()).with_logical_type(self.logical_type_name())
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            domain_kind: self.domain_kind(),
            width: self.primitive().width(),
            logical_type_name: self.logical_type_name(),
            recommended_schema: self.recommended_schema(),
        }
    }

    /// Wire value → domain value.
    fn decode(&self, wire: WireValue) -> Result<DomainValue>;

    /// Domain value → wire value.
    fn encode(&self, value: &DomainValue) -> Result<WireValue>;

    /// `false` for decode-only conversions, whose [`Self::encode`] always errors.
    fn supports_encode(&self) -> bool {
        true
    }
}

impl core::fmt::Debug for dyn Conversion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Conversion({:?})", self.logical_type_name())
    }
}

/// Fills in the identity methods of a [`Conversion`] impl.
macro_rules! conversion_identity {
    ($name:literal, $kind:ident, $primitive:ident) => {
        #[inline(always)]
        fn logical_type_name(&self) -> &'static str {
            $name
        }

        #[inline(always)]
        fn domain_kind(&self) -> crate::value::DomainKind {
            crate::value::DomainKind::$kind
        }

        #[inline(always)]
        fn primitive(&self) -> crate::schema::Primitive {
            crate::schema::Primitive::$primitive
        }
    };
}
pub(crate) use conversion_identity;
