use crate::error::{Error, Result};
use crate::JsonValue;

/// A literal type: quoted string content, a bare non-negative integer, or
/// a bare boolean token.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Literal<'a> {
    Str(&'a str),
    Int(u64),
    Bool(bool),
}

pub fn recognize(expr: &str) -> Option<Literal<'_>> {
    if let Some(content) = quoted(expr) {
        return Some(Literal::Str(content));
    }
    if !expr.is_empty() && expr.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Literal::Int(expr.parse().ok()?));
    }
    match expr {
        "true" => Some(Literal::Bool(true)),
        "false" => Some(Literal::Bool(false)),
        _ => None,
    }
}

/// Non-empty content between a matching pair of `'`, `"`, or backtick
/// quotes spanning the whole expression.
fn quoted(expr: &str) -> Option<&str> {
    let mut chars = expr.chars();
    let open = chars.next()?;
    if !matches!(open, '\'' | '"' | '`') || chars.next_back() != Some(open) {
        return None;
    }
    let content = chars.as_str();
    (!content.is_empty()).then_some(content)
}

/// Requires exact value equality with the literal. Numeric comparison is
/// numeric, so `30` also matches a float-encoded `30.0`.
pub fn validate(literal: Literal, value: &JsonValue) -> Result<JsonValue> {
    let matches = match literal {
        Literal::Str(content) => value.as_str() == Some(content),
        Literal::Int(n) => value.as_f64() == Some(n as f64),
        Literal::Bool(b) => value.as_bool() == Some(b),
    };

    if matches {
        Ok(value.clone())
    } else {
        Err(Error::LiteralMismatch {
            expected: literal.render().into(),
            got: value.to_string().into(),
        })
    }
}

impl Literal<'_> {
    fn render(&self) -> String {
        match self {
            Literal::Str(content) => (*content).to_string(),
            Literal::Int(n) => n.to_string(),
            Literal::Bool(b) => b.to_string(),
        }
    }
}
