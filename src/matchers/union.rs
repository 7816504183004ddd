use crate::error::{Error, Result};
use crate::{expr, scan, JsonValue};

/// Recognizes `T1 | T2` at the rightmost top-level pipe, so the left
/// operand is greedy and n-ary unions resolve by re-dispatching it.
pub fn recognize(expr: &str) -> Option<(&str, &str)> {
    scan::split_last_pipe(expr)
}

/// Tries the left branch first, then the right. Branch errors are
/// discarded; only the combined mismatch is reported.
pub fn validate(full: &str, left: &str, right: &str, value: &JsonValue) -> Result<JsonValue> {
    expr::validate(left, value)
        .or_else(|_| expr::validate(right, value))
        .map_err(|_| Error::UnionMismatch { expr: full.into() })
}
