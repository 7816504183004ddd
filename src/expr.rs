use crate::error::{self, Result};
use crate::matchers::{array, keyword, literal, tuple, union, wrapped};
use crate::JsonValue;

/// One variant per grammar production. The grammar is closed: there is no
/// registry and no user-defined types.
enum Production<'a> {
    Keyword(keyword::Keyword),
    Wrapped(&'a str),
    Array(&'a str),
    Tuple(&'a str),
    Union(&'a str, &'a str),
    Literal(literal::Literal<'a>),
}

/// Classifies a trimmed expression. Recognizers run in fixed priority
/// order; the first one that accepts wins, so an expression satisfying
/// two productions always resolves the same way.
fn classify(expr: &str) -> Option<Production<'_>> {
    if let Some(keyword) = keyword::recognize(expr) {
        return Some(Production::Keyword(keyword));
    }
    if let Some(inner) = wrapped::recognize(expr) {
        return Some(Production::Wrapped(inner));
    }
    if let Some(element_ty) = array::recognize(expr) {
        return Some(Production::Array(element_ty));
    }
    if let Some(body) = tuple::recognize(expr) {
        return Some(Production::Tuple(body));
    }
    if let Some((left, right)) = union::recognize(expr) {
        return Some(Production::Union(left, right));
    }
    if let Some(literal) = literal::recognize(expr) {
        return Some(Production::Literal(literal));
    }
    None
}

/// Validates `value` against the type expression `expr` and returns the
/// narrowed value. This is the single recursive entry point: every matcher
/// re-enters through here with its derived sub-expression.
pub fn validate(expr: &str, value: &JsonValue) -> Result<JsonValue> {
    let expr = expr.trim();

    match classify(expr) {
        Some(Production::Keyword(keyword)) => keyword::validate(keyword, value),
        Some(Production::Wrapped(inner)) => validate(inner, value),
        Some(Production::Array(element_ty)) => array::validate(element_ty, value),
        Some(Production::Tuple(body)) => tuple::validate(body, value),
        Some(Production::Union(left, right)) => union::validate(expr, left, right, value),
        Some(Production::Literal(literal)) => literal::validate(literal, value),
        None => Err(error::unknown_type(expr)),
    }
}
