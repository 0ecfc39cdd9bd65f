use regex::Regex;
use validator::{validate_length, validate_url, ValidationError};

use super::kind::ValidationErrorKind;

lazy_static! {
    pub static ref OBJECT_ID_REGEX: Regex = Regex::new(r"^[0-9a-fA-F]{24}$").unwrap();
}

pub type RuleResult = Result<(), ValidationError>;

/// Character count must fall inside `min..=max`. Either bound may be open.
pub fn length(value: &str, min: Option<u64>, max: Option<u64>, message: &'static str) -> RuleResult {
    if validate_length(value, min, max, None) {
        return Ok(());
    }

    let mut error = ValidationErrorKind::LengthOutOfRange.error(message);
    if let Some(min) = min {
        error.add_param("min".into(), &min);
    }
    if let Some(max) = max {
        error.add_param("max".into(), &max);
    }
    error.add_param("actual".into(), &(value.chars().count() as u64));

    Err(error)
}

/// Absolute http(s) URL.
pub fn url(value: &str, message: &'static str) -> RuleResult {
    let lowercase = value.to_ascii_lowercase();
    let has_web_scheme = lowercase.starts_with("http://") || lowercase.starts_with("https://");

    match has_web_scheme && validate_url(value) {
        true => Ok(()),
        false => Err(ValidationErrorKind::InvalidUrlFormat.error(message)),
    }
}

pub fn object_id(value: &str, message: &'static str) -> RuleResult {
    match OBJECT_ID_REGEX.is_match(value) {
        true => Ok(()),
        false => Err(ValidationErrorKind::InvalidIdFormat.error(message)),
    }
}
