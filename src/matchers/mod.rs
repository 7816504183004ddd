pub mod array;
pub mod keyword;
pub mod literal;
pub mod tuple;
pub mod union;
pub mod wrapped;
