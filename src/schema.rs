use crate::wire::Width;
use alloc::string::String;

/// Primitive wire type of a schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primitive {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
}

impl Primitive {
    pub fn width(self) -> Width {
        match self {
            Self::Int => Width::Int32,
            Self::Long => Width::Int64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
        }
    }
}

/// A primitive schema, optionally annotated with a logical type.
///
/// With the `serde` feature this is (de)serialized in its JSON form, e.g.
/// `{"type":"int","logicalType":"date"}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    primitive: Primitive,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "logicalType",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    logical_type: Option<String>,
}

impl Schema {
    /// A bare primitive schema without a logical type.
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            logical_type: None,
        }
    }

    pub fn with_logical_type(mut self, name: impl Into<String>) -> Self {
        self.logical_type = Some(name.into());
        self
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn logical_type(&self) -> Option<&str> {
        self.logical_type.as_deref()
    }
}
