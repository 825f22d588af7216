//! Column width checks for text fields backed by `VARCHAR(n)`.

use std::borrow::Cow;

use validator::ValidationError;

pub const TOO_LONG: &str = "Campo excede o tamanho máximo.";

/// PostgreSQL counts characters, not bytes.
fn at_most(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() <= max {
        return Ok(());
    }
    let mut err = ValidationError::new("length");
    err.add_param(Cow::from("max"), &max);
    err.message = Some(Cow::from(TOO_LONG));
    Err(err)
}

pub fn max_50(value: &str) -> Result<(), ValidationError> {
    at_most(value, 50)
}

pub fn max_100(value: &str) -> Result<(), ValidationError> {
    at_most(value, 100)
}

pub fn max_255(value: &str) -> Result<(), ValidationError> {
    at_most(value, 255)
}
