use serde::{Deserialize, Serialize};

use crate::{
    app::util::validation::{FieldReader, ValidationErrorKind},
    publications::models::photo_file::PhotoFile,
};

use super::create_publication_dto::PublicationBase;

pub const PHOTO: &str = "photo";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoPublicationDto {
    #[serde(flatten)]
    pub base: PublicationBase,
    pub photo: PhotoFile,
}

impl CreatePhotoPublicationDto {
    pub const FIELDS: &'static [&'static str] = &[PHOTO];

    pub fn from_fields(fields: &mut FieldReader<'_>) -> Option<Self> {
        let base = PublicationBase::from_fields(fields);
        let photo = match fields.value(PHOTO) {
            None => {
                fields.reject(PHOTO, ValidationErrorKind::MissingField.error("photo is required."));
                None
            }
            Some(value) => match PhotoFile::from_value(value) {
                Ok(photo) => {
                    fields.check_all(PHOTO, photo.validate_content());
                    Some(photo)
                }
                Err(e) => {
                    fields.reject(PHOTO, e);
                    None
                }
            },
        };

        Some(Self {
            base: base?,
            photo: photo?,
        })
    }
}
