pub mod fields;
pub mod kind;
pub mod rules;

#[cfg(test)]
pub use fields::kinds_of;
pub use fields::{field_errors, FieldReader, BODY_FIELD};
pub use kind::ValidationErrorKind;
