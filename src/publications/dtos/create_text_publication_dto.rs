use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{rules, FieldReader},
    publications::constants::{PublicationValidationMessage, PublicationValidationParams},
};

use super::create_publication_dto::{validate_title, PublicationBase, TITLE};

pub const ANNOUNCEMENT: &str = "announcement";
pub const ANNOUNCEMENT_TEXT: &str = "announcementText";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextPublicationDto {
    #[serde(flatten)]
    pub base: PublicationBase,
    pub announcement: String,
    pub announcement_text: String,
    pub title: String,
}

impl CreateTextPublicationDto {
    pub const FIELDS: &'static [&'static str] = &[ANNOUNCEMENT, ANNOUNCEMENT_TEXT, TITLE];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let base = PublicationBase::from_fields(fields);
        let announcement = fields.required(ANNOUNCEMENT, validate_announcement);
        let announcement_text = fields.required(ANNOUNCEMENT_TEXT, validate_announcement_text);
        let title = fields.required(TITLE, validate_title);

        Some(Self {
            base: base?,
            announcement: announcement?.to_string(),
            announcement_text: announcement_text?.to_string(),
            title: title?.to_string(),
        })
    }
}

fn validate_announcement(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        Some(PublicationValidationParams::ANNOUNCEMENT_MIN_LENGTH),
        Some(PublicationValidationParams::ANNOUNCEMENT_MAX_LENGTH),
        PublicationValidationMessage::ANNOUNCEMENT_LENGTH,
    )
}

fn validate_announcement_text(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        Some(PublicationValidationParams::TEXT_MIN_LENGTH),
        Some(PublicationValidationParams::TEXT_MAX_LENGTH),
        PublicationValidationMessage::ANNOUNCEMENT_TEXT_LENGTH,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use validator::ValidationErrors;

    use super::*;
    use crate::app::util::validation::{kinds_of, ValidationErrorKind};

    fn read(payload: &Value) -> Result<CreateTextPublicationDto, ValidationErrors> {
        let mut fields = FieldReader::new(payload)?;
        let dto = CreateTextPublicationDto::from_fields(&mut fields);
        fields.finish(dto)
    }

    #[test]
    fn accepts_text_within_bounds() {
        let dto = read(&json!({
            "state": "draft",
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6",
            "title": "Notes on ownership in Rust",
            "announcement": "a".repeat(50),
            "announcementText": "b".repeat(1024),
            "tags": [{ "value": "rust" }],
        }))
        .unwrap();

        assert_eq!(dto.announcement_text.len(), 1024);
    }

    #[test]
    fn reports_each_field_out_of_range() {
        let errors = read(&json!({
            "state": "draft",
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6",
            "title": "Notes on ownership in Rust",
            "announcement": "a".repeat(49),
            "announcementText": "b".repeat(1025),
        }))
        .unwrap_err();

        assert_eq!(kinds_of(&errors, ANNOUNCEMENT), vec![ValidationErrorKind::LengthOutOfRange]);
        assert_eq!(kinds_of(&errors, ANNOUNCEMENT_TEXT), vec![ValidationErrorKind::LengthOutOfRange]);
        assert!(kinds_of(&errors, TITLE).is_empty());
    }

    #[test]
    fn missing_fields_are_all_listed() {
        let errors = read(&json!({ "state": "draft", "userId": "65a1f0c2e4b0a1b2c3d4e5f6" })).unwrap_err();

        for field in [ANNOUNCEMENT, ANNOUNCEMENT_TEXT, TITLE] {
            assert_eq!(kinds_of(&errors, field), vec![ValidationErrorKind::MissingField]);
        }
    }
}
