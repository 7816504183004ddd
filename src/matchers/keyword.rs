use crate::error::{kind_of, Error, Result};
use crate::JsonValue;

/// One of the fixed primitive type names. The set is closed; `bigint` is
/// absent because JSON has no distinct big-integer runtime kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Keyword {
    Null,
    String,
    Number,
    Boolean,
    Undefined,
    Object,
}

pub fn recognize(expr: &str) -> Option<Keyword> {
    Some(match expr {
        "null" => Keyword::Null,
        "string" => Keyword::String,
        "number" => Keyword::Number,
        "boolean" => Keyword::Boolean,
        "undefined" => Keyword::Undefined,
        "object" => Keyword::Object,
        _ => return None,
    })
}

pub fn validate(keyword: Keyword, value: &JsonValue) -> Result<JsonValue> {
    let matches = match keyword {
        // `undefined` has no JSON image of its own; both sentinels fold
        // into null.
        Keyword::Null | Keyword::Undefined => value.is_null(),
        Keyword::String => value.is_string(),
        Keyword::Number => value.is_number(),
        Keyword::Boolean => value.is_boolean(),
        // Arrays satisfy the bare `object` keyword as well.
        Keyword::Object => value.is_object() || value.is_array(),
    };

    if matches {
        Ok(value.clone())
    } else {
        Err(Error::TypeMismatch {
            expected: keyword.name(),
            got: kind_of(value),
        })
    }
}

impl Keyword {
    pub fn name(self) -> &'static str {
        match self {
            Keyword::Null => "null",
            Keyword::String => "string",
            Keyword::Number => "number",
            Keyword::Boolean => "boolean",
            Keyword::Undefined => "undefined",
            Keyword::Object => "object",
        }
    }
}
