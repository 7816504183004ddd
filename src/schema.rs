use crate::error::{kind_of, missing_key, Error, Result};
use crate::{expr, JsonValue};

/// An object schema: named fields in authored order. Order only affects
/// which error is reported first.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Schema {
    /// The fields comprising the schema.
    pub fields: Box<[Field]>,
}

/// A schema field. A name ending in `?` marks the field optional; the `?`
/// is stripped before lookup.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Field {
    /// The name of the field.
    pub name: Box<str>,
    /// What the field's value must look like.
    pub descriptor: Descriptor,
}

/// A field is described either by a type expression or by a nested schema.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Descriptor {
    Expr(Box<str>),
    Schema(Schema),
}

impl From<&str> for Descriptor {
    fn from(expr: &str) -> Self {
        Descriptor::Expr(expr.into())
    }
}

impl From<Schema> for Descriptor {
    fn from(schema: Schema) -> Self {
        Descriptor::Schema(schema)
    }
}

/// A compiled schema, ready to validate values. Cheap to clone and safe to
/// share across threads; each `apply` call allocates only local state.
#[derive(Clone, Debug)]
pub struct Validator {
    schema: Schema,
}

pub fn compile(schema: Schema) -> Validator {
    Validator { schema }
}

impl Validator {
    pub fn apply(&self, value: &JsonValue) -> Result<JsonValue> {
        self.schema.validate(value)
    }
}

impl Schema {
    /// Walks the schema over `value`, returning a fresh object holding the
    /// narrowed value of every required key and every present optional key.
    pub fn validate(&self, value: &JsonValue) -> Result<JsonValue> {
        let object = value.as_object().ok_or(Error::NotAnObject { got: kind_of(value) })?;

        let mut parsed = serde_json::Map::new();

        for field in self.fields.iter() {
            let (key, optional) = split_optional(&field.name);

            let field_value = match object.get(key) {
                // An explicit null on an optional key counts as "no value"
                // and is omitted, same as absence.
                None | Some(JsonValue::Null) if optional => continue,
                None => return Err(missing_key(key)),
                Some(field_value) => field_value,
            };

            let narrowed = match &field.descriptor {
                Descriptor::Expr(ty) => expr::validate(ty, field_value)?,
                Descriptor::Schema(schema) => schema.validate(field_value)?,
            };
            parsed.insert(key.to_string(), narrowed);
        }

        Ok(JsonValue::Object(parsed))
    }
}

/// Strips a trailing `?`, yielding the lookup key and whether the field is
/// optional. A bare `?` is a regular one-character name.
fn split_optional(name: &str) -> (&str, bool) {
    match name.strip_suffix('?') {
        Some(key) if !key.is_empty() => (key, true),
        _ => (name, false),
    }
}

#[macro_export]
macro_rules! schema_def {
    ({
        // Comma-separated key-descriptor pairs
        $($key:literal : $value:expr),*
        // Allows trailing commas
        $(,)?
    }) => {{
        let fields = vec![
            // Expand each key-descriptor pair
            $(
                $crate::schema::Field {
                    name: $key.into(),
                    descriptor: $value.into(),
                }
            ),*
        ].into();
        $crate::schema::Schema { fields }
    }};
}
