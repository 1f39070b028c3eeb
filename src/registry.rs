use crate::conversion::Conversion;
use crate::conversions::{
    DATE, LOSSY_TIMESTAMP_MICROS, LOSSY_TIME_MICROS, TIMESTAMP_MICROS, TIMESTAMP_MILLIS,
    TIME_MICROS, TIME_MILLIS,
};
use crate::error::{error, error_from_display, ErrorKind};
use crate::schema::Schema;
use crate::value::{DomainKind, DomainValue};
use crate::wire::WireValue;
use crate::Result;
use alloc::vec::Vec;

/// A fixed set of conversions, unique by logical type name.
///
/// Built once and then only read, so a registry can be shared between threads freely.
#[derive(Clone)]
pub struct Registry {
    conversions: Vec<&'static dyn Conversion>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::lossy()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        debug_names(&self.conversions, f)
    }
}

fn debug_names(
    conversions: &[&'static dyn Conversion],
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    f.debug_list()
        .entries(conversions.iter().map(|c| c.logical_type_name()))
        .finish()
}

impl Registry {
    /// Every logical type, with the lossy microsecond conversions so that all of them can write.
    pub fn lossy() -> Self {
        Self::from_static(&[
            &DATE,
            &TIME_MILLIS,
            &LOSSY_TIME_MICROS,
            &TIMESTAMP_MILLIS,
            &LOSSY_TIMESTAMP_MICROS,
        ])
    }

    /// Every logical type, with the decode-only microsecond conversions.
    pub fn decode_only() -> Self {
        Self::from_static(&[
            &DATE,
            &TIME_MILLIS,
            &TIME_MICROS,
            &TIMESTAMP_MILLIS,
            &TIMESTAMP_MICROS,
        ])
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    // Only for the built-in sets, whose names are known to be unique.
    fn from_static(conversions: &[&'static dyn Conversion]) -> Self {
        debug_assert!(conversions.iter().enumerate().all(|(i, a)| conversions[..i]
            .iter()
            .all(|b| a.logical_type_name() != b.logical_type_name())));
        tracing::trace!(count = conversions.len(), "built conversion registry");
        Self {
            conversions: conversions.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Conversions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static dyn Conversion> + '_ {
        self.conversions.iter().copied()
    }

    pub fn get(&self, logical_type_name: &str) -> Option<&'static dyn Conversion> {
        self.iter()
            .find(|c| c.logical_type_name() == logical_type_name)
    }

    /// Like [`Self::get`] but a missing name is an [`ErrorKind::UnknownLogicalType`] error.
    pub fn lookup(&self, logical_type_name: &str) -> Result<&'static dyn Conversion> {
        self.get(logical_type_name).ok_or_else(|| {
            tracing::debug!(logical_type = %logical_type_name, "no conversion registered");
            error_from_display(
                ErrorKind::UnknownLogicalType,
                format_args!("logical type '{logical_type_name}' is not supported"),
            )
        })
    }

    /// Finds the conversion for a schema's logical type and checks that the logical type is
    /// allowed on the schema's primitive (e.g. `date` only annotates `int`).
    pub fn for_schema(&self, schema: &Schema) -> Result<&'static dyn Conversion> {
        let name = schema.logical_type().ok_or_else(|| {
            error(
                ErrorKind::UnknownLogicalType,
                "schema has no logical type annotation",
            )
        })?;
        let conversion = self.lookup(name)?;
        if conversion.primitive() != schema.primitive() {
            tracing::debug!(
                logical_type = %name,
                expected = conversion.primitive().name(),
                found = schema.primitive().name(),
                "logical type on the wrong primitive"
            );
            return Err(error_from_display(
                ErrorKind::SchemaMismatch,
                format_args!(
                    "'{name}' can only be used with an underlying {} type",
                    conversion.primitive().name()
                ),
            ));
        }
        Ok(conversion)
    }

    /// [`Self::for_schema`] that ignores invalid or unknown logical types.
    pub fn try_for_schema(&self, schema: &Schema) -> Option<&'static dyn Conversion> {
        self.for_schema(schema).ok()
    }

    /// The schema to write a value of `kind` with when the caller gives none: the recommended
    /// schema of the first registered conversion for that kind.
    pub fn recommended_schema_for(&self, kind: DomainKind) -> Option<Schema> {
        self.iter()
            .find(|c| c.domain_kind() == kind)
            .map(|c| c.recommended_schema())
    }

    pub fn decode(&self, schema: &Schema, wire: WireValue) -> Result<DomainValue> {
        self.for_schema(schema)?.decode(wire)
    }

    pub fn encode(&self, schema: &Schema, value: &DomainValue) -> Result<WireValue> {
        self.for_schema(schema)?.encode(value)
    }
}

/// Assembles a custom [`Registry`], e.g. to pick one `time-micros` variant but not the other.
#[derive(Default)]
pub struct RegistryBuilder {
    conversions: Vec<&'static dyn Conversion>,
}

impl core::fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        debug_names(&self.conversions, f)
    }
}

impl RegistryBuilder {
    /// Adds a conversion. Errors with [`ErrorKind::DuplicateLogicalType`] if one with the same
    /// logical type name is already registered.
    pub fn register(mut self, conversion: &'static dyn Conversion) -> Result<Self> {
        let name = conversion.logical_type_name();
        if self.conversions.iter().any(|c| c.logical_type_name() == name) {
            return Err(error_from_display(
                ErrorKind::DuplicateLogicalType,
                format_args!("logical type '{name}' is already registered"),
            ));
        }
        self.conversions.push(conversion);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        tracing::trace!(count = self.conversions.len(), "built conversion registry");
        Registry {
            conversions: self.conversions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Primitive;
    use alloc::vec;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_builtin_sets() {
        let names: Vec<_> = Registry::lossy().iter().map(|c| c.logical_type_name()).collect();
        assert_eq!(
            names,
            vec!["date", "time-millis", "time-micros", "timestamp-millis", "timestamp-micros"]
        );
        assert!(Registry::lossy().iter().all(|c| c.supports_encode()));

        let decode_only = Registry::decode_only();
        assert_eq!(decode_only.len(), 5);
        assert!(!decode_only.lookup("time-micros").unwrap().supports_encode());
        assert!(!decode_only.lookup("timestamp-micros").unwrap().supports_encode());
        assert!(decode_only.lookup("date").unwrap().supports_encode());
    }

    #[test]
    fn test_lookup() {
        let r = Registry::default();
        assert_eq!(r.get("date").unwrap().domain_kind(), DomainKind::Date);
        assert!(r.get("decimal").is_none());
        let e = r.lookup("decimal").unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnknownLogicalType);
        assert_eq!(e.to_string(), "logical type 'decimal' is not supported");
    }

    #[test]
    fn test_for_schema_validates_primitive() {
        let r = Registry::default();
        let ok = Schema::new(Primitive::Int).with_logical_type("date");
        assert_eq!(r.for_schema(&ok).unwrap().logical_type_name(), "date");

        let wrong = Schema::new(Primitive::Long).with_logical_type("date");
        let e = r.for_schema(&wrong).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::SchemaMismatch);
        assert_eq!(
            e.to_string(),
            "'date' can only be used with an underlying int type"
        );
        assert!(r.try_for_schema(&wrong).is_none());

        let bare = Schema::new(Primitive::Int);
        assert_eq!(
            r.for_schema(&bare).unwrap_err().kind(),
            ErrorKind::UnknownLogicalType
        );
        assert!(r.try_for_schema(&bare).is_none());

        for c in r.iter() {
            let schema = c.recommended_schema();
            assert_eq!(r.for_schema(&schema).unwrap().logical_type_name(), c.logical_type_name());
        }
    }

    #[test]
    fn test_recommended_schema_for() {
        let r = Registry::default();
        assert_eq!(
            r.recommended_schema_for(DomainKind::Date),
            Some(Schema::new(Primitive::Int).with_logical_type("date"))
        );
        assert_eq!(
            r.recommended_schema_for(DomainKind::TimeOfDay),
            Some(Schema::new(Primitive::Int).with_logical_type("time-millis"))
        );
        assert_eq!(
            r.recommended_schema_for(DomainKind::Instant),
            Some(Schema::new(Primitive::Long).with_logical_type("timestamp-millis"))
        );
        assert_eq!(
            Registry::builder().build().recommended_schema_for(DomainKind::Date),
            None
        );
    }

    #[test]
    fn test_dispatch() {
        let r = Registry::default();
        let schema = Schema::new(Primitive::Int).with_logical_type("date");
        let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert_eq!(r.encode(&schema, &date.into()), Ok(WireValue::Int(1)));
        assert_eq!(r.decode(&schema, WireValue::Int(1)), Ok(date.into()));

        let micros = Schema::new(Primitive::Long).with_logical_type("time-micros");
        let t = NaiveTime::from_hms_opt(1, 1, 1).unwrap();
        assert_eq!(
            r.encode(&micros, &t.into()),
            Ok(WireValue::Long(3_661_000_000))
        );
        assert_eq!(
            Registry::decode_only()
                .encode(&micros, &t.into())
                .unwrap_err()
                .kind(),
            ErrorKind::Unsupported
        );
    }

    #[test]
    fn test_builder() {
        let r = Registry::builder()
            .register(&DATE)
            .unwrap()
            .register(&TIME_MICROS)
            .unwrap()
            .build();
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(format!("{r:?}"), r#"["date", "time-micros"]"#);

        let e = Registry::builder()
            .register(&TIME_MICROS)
            .unwrap()
            .register(&LOSSY_TIME_MICROS)
            .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::DuplicateLogicalType);
        assert_eq!(e.to_string(), "logical type 'time-micros' is already registered");

        assert!(Registry::builder().build().is_empty());
    }
}
