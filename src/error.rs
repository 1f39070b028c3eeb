use alloc::borrow::Cow;
use core::fmt::{Debug, Display, Formatter};

/// Short version of `Err(error(kind, "..."))`.
pub fn err<T>(kind: ErrorKind, msg: &'static str) -> Result<T, Error> {
    Err(error(kind, msg))
}

/// Creates an error with a static message.
pub fn error(kind: ErrorKind, msg: &'static str) -> Error {
    Error {
        kind,
        msg: Cow::Borrowed(msg),
    }
}

/// Creates an error from a `T:` [`Display`], for messages that name a logical type.
pub fn error_from_display(kind: ErrorKind, t: impl Display) -> Error {
    Error {
        kind,
        msg: Cow::Owned(alloc::string::ToString::to_string(&t)),
    }
}

/// What went wrong. Conversions themselves never fail for values inside their documented
/// domain, so most kinds describe a caller handing the wrong thing to the wrong converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No conversion is registered under the requested logical type name.
    UnknownLogicalType,
    /// A [`RegistryBuilder`](crate::RegistryBuilder) already holds a conversion with that name.
    DuplicateLogicalType,
    /// The logical type annotates a primitive it can't be stored in.
    SchemaMismatch,
    /// The wire value has the wrong integer width for the conversion.
    WireWidth,
    /// The domain value is the wrong kind (e.g. a time-of-day given to `date`).
    DomainKind,
    /// The conversion is decode-only.
    Unsupported,
    /// The wire value lies outside the range chrono can represent.
    OutOfRange,
}

/// Conversion / lookup errors.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Error({:?}, {:?})", self.kind, self.msg)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for Error {}
