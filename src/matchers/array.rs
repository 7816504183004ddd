use crate::error::{kind_of, Error, Result};
use crate::{expr, scan, JsonValue};

/// Recognizes `Array<T>` or `T[]`, yielding the element type `T`.
pub fn recognize(expr: &str) -> Option<&str> {
    scan::strip_array(expr)
}

/// Validates every element against the element type, in order, fail-fast.
pub fn validate(element_ty: &str, value: &JsonValue) -> Result<JsonValue> {
    let array = value.as_array().ok_or(Error::NotAnArray { got: kind_of(value) })?;

    let elements = array
        .iter()
        .map(|element| expr::validate(element_ty, element))
        .collect::<Result<Vec<_>>>()?;

    Ok(JsonValue::Array(elements))
}
