use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{rules, FieldReader, ValidationErrorKind},
    publications::{
        constants::{PublicationValidationMessage, PublicationValidationParams},
        enums::{publication_state::PublicationState, publication_type::PublicationType},
        models::tag::{validate_tags, Tag},
    },
};

use super::{
    create_link_publication_dto::CreateLinkPublicationDto,
    create_photo_publication_dto::CreatePhotoPublicationDto,
    create_quote_publication_dto::CreateQuotePublicationDto,
    create_text_publication_dto::CreateTextPublicationDto,
    create_video_publication_dto::CreateVideoPublicationDto,
};

pub const TYPE: &str = "type";
pub const STATE: &str = "state";
pub const USER_ID: &str = "userId";
pub const TAGS: &str = "tags";
pub const TITLE: &str = "title";

/// Fields every publication carries, embedded in each variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationBase {
    pub state: PublicationState,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl PublicationBase {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[STATE, USER_ID];
    pub const OPTIONAL_FIELDS: &'static [&'static str] = &[TAGS];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let state = fields
            .required(STATE, |value| match PublicationState::from_value(value) {
                Some(_) => Ok(()),
                None => Err(ValidationErrorKind::InvalidType.error(PublicationValidationMessage::STATE_INVALID)),
            })
            .and_then(PublicationState::from_value);
        let user_id = fields.required(USER_ID, validate_user_id);
        let tags = match fields.value(TAGS) {
            None => Some(None),
            Some(value) => match Tag::list_from_value(value) {
                Ok(tags) => {
                    fields.check_all(TAGS, validate_tags(&tags));
                    Some(Some(tags))
                }
                Err(e) => {
                    fields.reject(TAGS, e);
                    None
                }
            },
        };

        Some(Self {
            state: state?,
            user_id: user_id?.to_string(),
            tags: tags?,
        })
    }
}

/// A validated publication, tagged by its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CreatePublicationDto {
    Video(CreateVideoPublicationDto),
    Text(CreateTextPublicationDto),
    Quote(CreateQuotePublicationDto),
    Photo(CreatePhotoPublicationDto),
    Link(CreateLinkPublicationDto),
}

impl CreatePublicationDto {
    pub fn publication_type(&self) -> PublicationType {
        match self {
            Self::Video(_) => PublicationType::Video,
            Self::Text(_) => PublicationType::Text,
            Self::Quote(_) => PublicationType::Quote,
            Self::Photo(_) => PublicationType::Photo,
            Self::Link(_) => PublicationType::Link,
        }
    }

    pub fn base(&self) -> &PublicationBase {
        match self {
            Self::Video(dto) => &dto.base,
            Self::Text(dto) => &dto.base,
            Self::Quote(dto) => &dto.base,
            Self::Photo(dto) => &dto.base,
            Self::Link(dto) => &dto.base,
        }
    }
}

fn validate_user_id(value: &str) -> rules::RuleResult {
    rules::object_id(value, PublicationValidationMessage::USER_ID_FORMAT)
}

pub(super) fn validate_title(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        Some(PublicationValidationParams::TITLE_MIN_LENGTH),
        Some(PublicationValidationParams::TITLE_MAX_LENGTH),
        PublicationValidationMessage::TITLE_LENGTH,
    )
}
