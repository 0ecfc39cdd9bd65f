use serde_json::Value;
use validator::ValidationErrors;

use crate::app::util::validation::{FieldReader, ValidationErrorKind};

use super::{
    constants::PublicationValidationMessage,
    dtos::{
        create_link_publication_dto::CreateLinkPublicationDto,
        create_photo_publication_dto::CreatePhotoPublicationDto,
        create_publication_dto::{CreatePublicationDto, PublicationBase, TYPE},
        create_quote_publication_dto::CreateQuotePublicationDto,
        create_text_publication_dto::CreateTextPublicationDto,
        create_video_publication_dto::CreateVideoPublicationDto,
    },
    enums::publication_type::PublicationType,
};

type Parser = fn(&mut FieldReader<'_>) -> Option<CreatePublicationDto>;

/// Field validators for one publication type.
pub struct PublicationSchema {
    pub publication_type: PublicationType,
    /// Required fields on top of `PublicationBase`.
    pub fields: &'static [&'static str],
    parse: Parser,
}

static VIDEO_SCHEMA: PublicationSchema = PublicationSchema {
    publication_type: PublicationType::Video,
    fields: CreateVideoPublicationDto::FIELDS,
    parse: parse_video,
};

static TEXT_SCHEMA: PublicationSchema = PublicationSchema {
    publication_type: PublicationType::Text,
    fields: CreateTextPublicationDto::FIELDS,
    parse: parse_text,
};

static QUOTE_SCHEMA: PublicationSchema = PublicationSchema {
    publication_type: PublicationType::Quote,
    fields: CreateQuotePublicationDto::FIELDS,
    parse: parse_quote,
};

static PHOTO_SCHEMA: PublicationSchema = PublicationSchema {
    publication_type: PublicationType::Photo,
    fields: CreatePhotoPublicationDto::FIELDS,
    parse: parse_photo,
};

static LINK_SCHEMA: PublicationSchema = PublicationSchema {
    publication_type: PublicationType::Link,
    fields: CreateLinkPublicationDto::FIELDS,
    parse: parse_link,
};

impl PublicationType {
    pub fn schema(self) -> &'static PublicationSchema {
        match self {
            Self::Video => &VIDEO_SCHEMA,
            Self::Text => &TEXT_SCHEMA,
            Self::Quote => &QUOTE_SCHEMA,
            Self::Photo => &PHOTO_SCHEMA,
            Self::Link => &LINK_SCHEMA,
        }
    }
}

impl PublicationSchema {
    pub fn required_fields(&self) -> Vec<&'static str> {
        PublicationBase::REQUIRED_FIELDS
            .iter()
            .chain(self.fields)
            .copied()
            .collect()
    }

    pub fn optional_fields(&self) -> Vec<&'static str> {
        PublicationBase::OPTIONAL_FIELDS.to_vec()
    }

    /// Validates `payload` against this schema. A `type` key is tolerated
    /// only when it names this schema's type.
    pub fn validate(&self, payload: &Value) -> Result<CreatePublicationDto, ValidationErrors> {
        let mut fields = FieldReader::new(payload)?;

        let mut allowed = self.required_fields();
        allowed.extend(self.optional_fields());
        allowed.push(TYPE);
        fields.deny_unknown(&allowed);

        if let Some(discriminant) = fields.value(TYPE) {
            if discriminant.as_str() != Some(self.publication_type.value()) {
                let mut error = ValidationErrorKind::DiscriminantMismatch.error(PublicationValidationMessage::TYPE_MISMATCH);
                error.add_param("expected".into(), &self.publication_type.value());
                fields.reject(TYPE, error);
            }
        }

        let dto = (self.parse)(&mut fields);
        fields.finish(dto)
    }
}

/// Looks up the schema for a raw discriminant.
pub fn schema_for(discriminant: &str) -> Result<&'static PublicationSchema, ValidationErrors> {
    match discriminant.parse::<PublicationType>() {
        Ok(publication_type) => Ok(publication_type.schema()),
        Err(e) => {
            let mut error = ValidationErrorKind::UnknownDiscriminant.error(PublicationValidationMessage::TYPE_UNKNOWN);
            error.add_param("value".into(), &e.0);

            let mut errors = ValidationErrors::new();
            errors.add(TYPE, error);
            Err(errors)
        }
    }
}

/// Validates a payload that names its own type in a `type` key.
pub fn validate_publication(payload: &Value) -> Result<CreatePublicationDto, ValidationErrors> {
    FieldReader::new(payload)?;

    let discriminant = match payload.get(TYPE).filter(|value| !value.is_null()) {
        None => Err(ValidationErrorKind::MissingField.error("type is required.")),
        Some(value) => value
            .as_str()
            .ok_or_else(|| ValidationErrorKind::InvalidType.error("type must be a string.")),
    };

    match discriminant {
        Ok(discriminant) => schema_for(discriminant)?.validate(payload),
        Err(error) => {
            let mut errors = ValidationErrors::new();
            errors.add(TYPE, error);
            Err(errors)
        }
    }
}

fn parse_video(fields: &mut FieldReader<'_>) -> Option<CreatePublicationDto> {
    CreateVideoPublicationDto::from_fields(fields).map(CreatePublicationDto::Video)
}

fn parse_text(fields: &mut FieldReader<'_>) -> Option<CreatePublicationDto> {
    CreateTextPublicationDto::from_fields(fields).map(CreatePublicationDto::Text)
}

fn parse_quote(fields: &mut FieldReader<'_>) -> Option<CreatePublicationDto> {
    CreateQuotePublicationDto::from_fields(fields).map(CreatePublicationDto::Quote)
}

fn parse_photo(fields: &mut FieldReader<'_>) -> Option<CreatePublicationDto> {
    CreatePhotoPublicationDto::from_fields(fields).map(CreatePublicationDto::Photo)
}

fn parse_link(fields: &mut FieldReader<'_>) -> Option<CreatePublicationDto> {
    CreateLinkPublicationDto::from_fields(fields).map(CreatePublicationDto::Link)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        app::util::validation::{kinds_of, BODY_FIELD},
        publications::models::photo_file::tests::PNG_1X1,
    };

    const USER: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

    #[test]
    fn each_type_maps_to_its_variant_fields() {
        let expected: [(PublicationType, &[&str]); 5] = [
            (PublicationType::Video, &["title", "videoLink"]),
            (PublicationType::Text, &["announcement", "announcementText", "title"]),
            (PublicationType::Quote, &["quoteAuthor", "quoteText"]),
            (PublicationType::Photo, &["photo"]),
            (PublicationType::Link, &["link", "linkDescription"]),
        ];

        for (publication_type, fields) in expected {
            let schema = publication_type.schema();
            assert_eq!(schema.publication_type, publication_type);

            let mut actual = schema.fields.to_vec();
            actual.sort();
            let mut fields = fields.to_vec();
            fields.sort();
            assert_eq!(actual, fields);

            let required = schema.required_fields();
            assert!(required.contains(&"state") && required.contains(&"userId"));
            assert_eq!(schema.optional_fields(), vec!["tags"]);
        }
    }

    #[test]
    fn unknown_discriminant_is_rejected() {
        let errors = schema_for("story").err().unwrap();

        assert_eq!(kinds_of(&errors, TYPE), vec![ValidationErrorKind::UnknownDiscriminant]);
    }

    #[test]
    fn discriminant_is_read_from_payload() {
        let dto = validate_publication(&json!({
            "type": "link",
            "state": "draft",
            "userId": USER,
            "link": "https://htmlacademy.ru/",
            "linkDescription": "Your academy",
        }))
        .unwrap();

        assert_eq!(dto.publication_type(), PublicationType::Link);
        assert_eq!(dto.base().user_id, USER);
    }

    #[test]
    fn absent_or_malformed_discriminant_is_rejected() {
        let errors = validate_publication(&json!({ "state": "draft" })).unwrap_err();
        assert_eq!(kinds_of(&errors, TYPE), vec![ValidationErrorKind::MissingField]);

        let errors = validate_publication(&json!({ "type": 3 })).unwrap_err();
        assert_eq!(kinds_of(&errors, TYPE), vec![ValidationErrorKind::InvalidType]);

        let errors = validate_publication(&json!({ "type": "story" })).unwrap_err();
        assert_eq!(kinds_of(&errors, TYPE), vec![ValidationErrorKind::UnknownDiscriminant]);
    }

    #[test]
    fn non_object_body_is_invalid_type() {
        for payload in [json!([1, 2]), json!("video"), json!(null)] {
            let errors = validate_publication(&payload).unwrap_err();

            assert_eq!(kinds_of(&errors, BODY_FIELD), vec![ValidationErrorKind::InvalidType]);
            assert!(kinds_of(&errors, TYPE).is_empty());
        }
    }

    #[test]
    fn payload_of_another_variant_fails() {
        let errors = PublicationType::Video
            .schema()
            .validate(&json!({
                "state": "draft",
                "userId": USER,
                "quoteAuthor": "Jason Statham",
                "quoteText": "Today people worth less than their clothes",
            }))
            .unwrap_err();

        assert_eq!(kinds_of(&errors, BODY_FIELD), vec![ValidationErrorKind::UnexpectedField]);
        assert_eq!(kinds_of(&errors, "title"), vec![ValidationErrorKind::MissingField]);
        assert_eq!(kinds_of(&errors, "videoLink"), vec![ValidationErrorKind::MissingField]);
    }

    #[test]
    fn conflicting_type_key_fails() {
        let errors = PublicationType::Video
            .schema()
            .validate(&json!({
                "type": "link",
                "state": "draft",
                "userId": USER,
                "title": "A walk through the old town",
                "videoLink": "https://youtu.be/abc",
            }))
            .unwrap_err();

        assert_eq!(kinds_of(&errors, TYPE), vec![ValidationErrorKind::DiscriminantMismatch]);
    }

    #[test]
    fn validated_dto_serializes_as_tagged_union() {
        let payload = json!({
            "type": "photo",
            "state": "published",
            "userId": USER,
            "tags": [{ "value": "selfie" }],
            "photo": { "fileName": "selfie.png", "mimeType": "image/png", "data": PNG_1X1 },
        });

        let dto = validate_publication(&payload).unwrap();

        assert_eq!(serde_json::to_value(&dto).unwrap(), payload);
        let back: CreatePublicationDto = serde_json::from_value(payload).unwrap();
        assert_eq!(back, dto);
    }
}
