use crate::scan;

/// Recognizes an expression enclosed in one redundant pair of parentheses,
/// e.g. the `(boolean)` in `(boolean)[]`. Validation is just re-dispatch of
/// the inner expression, done by the caller.
pub fn recognize(expr: &str) -> Option<&str> {
    scan::strip_wrapped(expr)
}
