pub mod error;
pub mod expr;
mod matchers;
mod scan;
pub mod schema;

pub use error::{Error, Result};
pub use expr::validate;
pub use schema::{compile, Descriptor, Field, Schema, Validator};

pub type JsonValue = serde_json::Value;
