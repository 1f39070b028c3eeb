use crate::error::{err, ErrorKind};
use crate::Result;

/// Integer width of a wire value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    Int32,
    Int64,
}

/// A raw integer as it is read from or written to a serialized record, relative to the
/// conversion's origin (day 0, midnight or the epoch instant).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireValue {
    Int(i32),
    Long(i64),
}

impl WireValue {
    pub fn width(&self) -> Width {
        match self {
            Self::Int(_) => Width::Int32,
            Self::Long(_) => Width::Int64,
        }
    }

    /// Returns the 32-bit value or a [`ErrorKind::WireWidth`] error.
    pub fn as_int(&self) -> Result<i32> {
        match *self {
            Self::Int(v) => Ok(v),
            Self::Long(_) => err(ErrorKind::WireWidth, "expected a 32-bit wire value"),
        }
    }

    /// Returns the 64-bit value or a [`ErrorKind::WireWidth`] error. A 32-bit value is not
    /// widened since it was written under a different schema.
    pub fn as_long(&self) -> Result<i64> {
        match *self {
            Self::Long(v) => Ok(v),
            Self::Int(_) => err(ErrorKind::WireWidth, "expected a 64-bit wire value"),
        }
    }
}

impl From<i32> for WireValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for WireValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}
