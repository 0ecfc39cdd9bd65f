use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{rules, FieldReader},
    publications::constants::{PublicationValidationMessage, PublicationValidationParams},
};

use super::create_publication_dto::PublicationBase;

pub const QUOTE_AUTHOR: &str = "quoteAuthor";
pub const QUOTE_TEXT: &str = "quoteText";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuotePublicationDto {
    #[serde(flatten)]
    pub base: PublicationBase,
    pub quote_author: String,
    pub quote_text: String,
}

impl CreateQuotePublicationDto {
    pub const FIELDS: &'static [&'static str] = &[QUOTE_AUTHOR, QUOTE_TEXT];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let base = PublicationBase::from_fields(fields);
        let quote_author = fields.required(QUOTE_AUTHOR, validate_quote_author);
        let quote_text = fields.required(QUOTE_TEXT, validate_quote_text);

        Some(Self {
            base: base?,
            quote_author: quote_author?.to_string(),
            quote_text: quote_text?.to_string(),
        })
    }
}

fn validate_quote_author(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        Some(PublicationValidationParams::QUOTE_AUTHOR_MIN_LENGTH),
        Some(PublicationValidationParams::QUOTE_AUTHOR_MAX_LENGTH),
        PublicationValidationMessage::QUOTE_AUTHOR_LENGTH,
    )
}

fn validate_quote_text(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        Some(PublicationValidationParams::QUOTE_TEXT_MIN_LENGTH),
        Some(PublicationValidationParams::QUOTE_TEXT_MAX_LENGTH),
        PublicationValidationMessage::QUOTE_TEXT_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use validator::ValidationErrors;

    use super::*;
    use crate::app::util::validation::{kinds_of, ValidationErrorKind};

    fn read(payload: &Value) -> Result<CreateQuotePublicationDto, ValidationErrors> {
        let mut fields = FieldReader::new(payload)?;
        let dto = CreateQuotePublicationDto::from_fields(&mut fields);
        fields.finish(dto)
    }

    #[test]
    fn accepts_quote() {
        let dto = read(&json!({
            "state": "published",
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6",
            "quoteAuthor": "Jason Statham",
            "quoteText": "Today people worth less than their clothes",
        }))
        .unwrap();

        assert_eq!(dto.quote_author, "Jason Statham");
    }

    #[test]
    fn short_author_and_wrong_type_text() {
        let errors = read(&json!({
            "state": "published",
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6",
            "quoteAuthor": "JS",
            "quoteText": ["not", "a", "string"],
        }))
        .unwrap_err();

        assert_eq!(kinds_of(&errors, QUOTE_AUTHOR), vec![ValidationErrorKind::LengthOutOfRange]);
        assert_eq!(kinds_of(&errors, QUOTE_TEXT), vec![ValidationErrorKind::InvalidType]);
    }

    #[test]
    fn overlong_quote_is_out_of_range() {
        let errors = read(&json!({
            "state": "published",
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6",
            "quoteAuthor": "Jason Statham",
            "quoteText": "q".repeat(301),
        }))
        .unwrap_err();

        assert_eq!(kinds_of(&errors, QUOTE_TEXT), vec![ValidationErrorKind::LengthOutOfRange]);
        assert!(kinds_of(&errors, QUOTE_AUTHOR).is_empty());
    }
}
