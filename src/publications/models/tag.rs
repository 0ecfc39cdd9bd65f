use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationError;

use crate::{
    app::util::validation::{rules, ValidationErrorKind},
    publications::constants::{PublicationValidationMessage, PublicationValidationParams},
};

const VALUE: &str = "value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub value: String,
}

impl Tag {
    /// Reads a JSON `tags` value. Anything other than an array of
    /// `{ "value": string }` objects is an `InvalidType` failure; a tag
    /// object with keys besides `value` is an `UnexpectedField` one.
    pub fn list_from_value(value: &Value) -> Result<Vec<Tag>, ValidationError> {
        let invalid = || ValidationErrorKind::InvalidType.error(PublicationValidationMessage::TAGS_INVALID);

        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<Tag, ValidationError> {
                let object = item.as_object().ok_or_else(invalid)?;
                let tag = object
                    .get(VALUE)
                    .and_then(Value::as_str)
                    .map(|value| Tag {
                        value: value.to_string(),
                    })
                    .ok_or_else(invalid)?;

                let mut unexpected: Vec<&String> = object.keys().filter(|key| key.as_str() != VALUE).collect();
                if unexpected.is_empty() {
                    return Ok(tag);
                }
                unexpected.sort();

                let mut error =
                    ValidationErrorKind::UnexpectedField.error(PublicationValidationMessage::TAG_UNEXPECTED_FIELD);
                error.add_param("index".into(), &index);
                error.add_param("fields".into(), &unexpected);
                Err(error)
            })
            .collect()
    }
}

/// Every failure across the list, each tagged with the offending index.
pub fn validate_tags(tags: &[Tag]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tags.len() > PublicationValidationParams::TAGS_MAX_COUNT {
        let mut error = ValidationErrorKind::LengthOutOfRange.error(PublicationValidationMessage::TAGS_COUNT);
        error.add_param("max".into(), &PublicationValidationParams::TAGS_MAX_COUNT);
        error.add_param("actual".into(), &tags.len());
        errors.push(error);
    }

    for (index, tag) in tags.iter().enumerate() {
        let result = rules::length(
            &tag.value,
            Some(PublicationValidationParams::TAG_MIN_LENGTH),
            Some(PublicationValidationParams::TAG_MAX_LENGTH),
            PublicationValidationMessage::TAG_LENGTH,
        )
        .and_then(|_| validate_tag_format(&tag.value));

        if let Err(mut error) = result {
            error.add_param("index".into(), &index);
            errors.push(error);
        }
    }

    errors
}

fn validate_tag_format(value: &str) -> rules::RuleResult {
    let starts_with_letter = value.chars().next().map_or(false, char::is_alphabetic);
    let has_whitespace = value.chars().any(char::is_whitespace);

    match starts_with_letter && !has_whitespace {
        true => Ok(()),
        false => Err(ValidationErrorKind::InvalidTagFormat.error(PublicationValidationMessage::TAG_FORMAT)),
    }
}
