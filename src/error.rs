use thiserror::Error;

/// Every failure the validator can report. Validation is fail-fast: the
/// first error found during the depth-first walk is the only one surfaced.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("not an object: expected an object to parse, got {got}")]
    NotAnObject { got: &'static str },
    #[error("missing key: {key}")]
    MissingKey { key: Box<str> },
    #[error("unknown type: {expr}")]
    UnknownType { expr: Box<str> },
    #[error("type mismatch: expected type {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: &'static str },
    #[error("not an array: expected an array, got {got}")]
    NotAnArray { got: &'static str },
    #[error("length mismatch: expected {expected} items, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("literal mismatch: expected value to equal {expected}, got {got}")]
    LiteralMismatch { expected: Box<str>, got: Box<str> },
    #[error("union mismatch: expected type {expr}")]
    UnionMismatch { expr: Box<str> },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A short name for a JSON value's runtime kind, used in error messages.
pub fn kind_of(value: &crate::JsonValue) -> &'static str {
    match value {
        crate::JsonValue::Null => "null",
        crate::JsonValue::Bool(_) => "a boolean",
        crate::JsonValue::Number(_) => "a number",
        crate::JsonValue::String(_) => "a string",
        crate::JsonValue::Array(_) => "an array",
        crate::JsonValue::Object(_) => "an object",
    }
}

pub fn unknown_type(expr: &str) -> Error {
    Error::UnknownType { expr: expr.into() }
}

pub fn missing_key(key: &str) -> Error {
    Error::MissingKey { key: key.into() }
}
