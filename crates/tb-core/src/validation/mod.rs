pub mod field;
pub mod field_value;
pub mod sanitize;
