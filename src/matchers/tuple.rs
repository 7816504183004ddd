use crate::error::{kind_of, Error, Result};
use crate::{expr, scan, JsonValue};

/// Recognizes `[T1, T2, ...]`, yielding the bracketed body.
pub fn recognize(expr: &str) -> Option<&str> {
    if !expr.starts_with('[') || !expr.ends_with(']') || expr.len() < 3 {
        return None;
    }
    Some(&expr[1..expr.len() - 1])
}

/// Validates a fixed-arity sequence: part count must equal value length,
/// each part type checked positionally, fail-fast.
pub fn validate(body: &str, value: &JsonValue) -> Result<JsonValue> {
    let array = value.as_array().ok_or(Error::NotAnArray { got: kind_of(value) })?;

    let parts = scan::split_parts(body);
    if parts.len() != array.len() {
        return Err(Error::LengthMismatch {
            expected: parts.len(),
            got: array.len(),
        });
    }

    let elements = parts
        .iter()
        .zip(array)
        .map(|(part, element)| expr::validate(part, element))
        .collect::<Result<Vec<_>>>()?;

    Ok(JsonValue::Array(elements))
}
