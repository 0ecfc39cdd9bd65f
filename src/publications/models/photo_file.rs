use bytes::Bytes;
use mime::Mime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use validator::ValidationError;

use crate::{
    app::util::validation::ValidationErrorKind,
    publications::constants::{PublicationValidationMessage, PublicationValidationParams},
};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// An uploaded photo. `data` travels as base64 in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: String,
    #[serde(serialize_with = "serialize_base64", deserialize_with = "deserialize_base64")]
    pub data: Bytes,
}

impl PhotoFile {
    /// Shape check only; content rules live in `validate_content`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let field = |name: &str| value.get(name).and_then(Value::as_str);

        let (Some(file_name), Some(mime_type), Some(data)) =
            (field("fileName"), field("mimeType"), field("data"))
        else {
            return Err(ValidationErrorKind::InvalidType.error(PublicationValidationMessage::PHOTO_INVALID));
        };

        let data = base64::decode(data)
            .map_err(|_| ValidationErrorKind::InvalidFileContent.error(PublicationValidationMessage::PHOTO_CONTENT))?;

        Ok(Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            data: Bytes::from(data),
        })
    }

    /// Declared type must be jpeg or png and agree with the bytes; size is
    /// capped; the bytes must parse as an image.
    pub fn validate_content(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let declared = self.mime_type.parse::<Mime>().ok().and_then(|mime| ImageFormat::from_mime(&mime));
        let detected = ImageFormat::detect(&self.data);

        match (declared, detected) {
            (None, _) => errors.push(ValidationErrorKind::InvalidMediaType.error(PublicationValidationMessage::PHOTO_MEDIA_TYPE)),
            (Some(declared), Some(detected)) if declared != detected => {
                let mut error = ValidationErrorKind::InvalidMediaType.error(PublicationValidationMessage::PHOTO_MEDIA_TYPE);
                error.add_param("detected".into(), &detected.mime().essence_str());
                errors.push(error);
            }
            _ => {}
        }

        if self.data.len() > PublicationValidationParams::PHOTO_MAX_BYTES {
            let mut error = ValidationErrorKind::FileTooLarge.error(PublicationValidationMessage::PHOTO_SIZE);
            error.add_param("max".into(), &PublicationValidationParams::PHOTO_MAX_BYTES);
            error.add_param("actual".into(), &self.data.len());
            errors.push(error);
        }

        let readable = detected.is_some()
            && matches!(imagesize::blob_size(&self.data), Ok(size) if size.width > 0 && size.height > 0);
        if !readable {
            errors.push(ValidationErrorKind::InvalidFileContent.error(PublicationValidationMessage::PHOTO_CONTENT));
        }

        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    fn from_mime(mime: &Mime) -> Option<Self> {
        if mime.type_() != mime::IMAGE {
            return None;
        }

        if mime.subtype() == mime::JPEG {
            Some(Self::Jpeg)
        } else if mime.subtype() == mime::PNG {
            Some(Self::Png)
        } else {
            None
        }
    }

    fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if data.starts_with(JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    fn mime(&self) -> Mime {
        match *self {
            Self::Jpeg => mime::IMAGE_JPEG,
            Self::Png => mime::IMAGE_PNG,
        }
    }
}

fn serialize_base64<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::encode(data))
}

fn deserialize_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    base64::decode(encoded)
        .map(Bytes::from)
        .map_err(serde::de::Error::custom)
}
