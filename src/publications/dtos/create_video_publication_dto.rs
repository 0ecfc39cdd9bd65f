use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{rules, FieldReader},
    publications::constants::PublicationValidationMessage,
};

use super::create_publication_dto::{validate_title, PublicationBase, TITLE};

pub const VIDEO_LINK: &str = "videoLink";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoPublicationDto {
    #[serde(flatten)]
    pub base: PublicationBase,
    pub title: String,
    pub video_link: String,
}

impl CreateVideoPublicationDto {
    pub const FIELDS: &'static [&'static str] = &[TITLE, VIDEO_LINK];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let base = PublicationBase::from_fields(fields);
        let title = fields.required(TITLE, validate_title);
        let video_link = fields.required(VIDEO_LINK, validate_video_link);

        Some(Self {
            base: base?,
            title: title?.to_string(),
            video_link: video_link?.to_string(),
        })
    }
}

fn validate_video_link(value: &str) -> rules::RuleResult {
    rules::url(value, PublicationValidationMessage::VIDEO_LINK_FORMAT)
}
