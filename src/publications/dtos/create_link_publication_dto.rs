use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{rules, FieldReader},
    publications::constants::{PublicationValidationMessage, PublicationValidationParams},
};

use super::create_publication_dto::PublicationBase;

pub const LINK: &str = "link";
pub const LINK_DESCRIPTION: &str = "linkDescription";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkPublicationDto {
    #[serde(flatten)]
    pub base: PublicationBase,
    pub link: String,
    pub link_description: String,
}

impl CreateLinkPublicationDto {
    pub const FIELDS: &'static [&'static str] = &[LINK, LINK_DESCRIPTION];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let base = PublicationBase::from_fields(fields);
        let link = fields.required(LINK, validate_link);
        let link_description = fields.required(LINK_DESCRIPTION, validate_link_description);

        Some(Self {
            base: base?,
            link: link?.to_string(),
            link_description: link_description?.to_string(),
        })
    }
}

fn validate_link(value: &str) -> rules::RuleResult {
    rules::url(value, PublicationValidationMessage::LINK_FORMAT)
}

fn validate_link_description(value: &str) -> rules::RuleResult {
    rules::length(
        value,
        None,
        Some(PublicationValidationParams::LINK_DESCRIPTION_MAX_LENGTH),
        PublicationValidationMessage::LINK_DESCRIPTION_LENGTH,
    )
}
