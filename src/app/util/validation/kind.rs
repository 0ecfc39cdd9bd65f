use std::borrow::Cow;

use validator::ValidationError;

/// Every way a field can fail validation. The code is what ends up in
/// `ValidationError::code` and in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    EmptyField,
    InvalidType,
    LengthOutOfRange,
    InvalidUrlFormat,
    InvalidIdFormat,
    UnknownDiscriminant,
    DiscriminantMismatch,
    UnexpectedField,
    InvalidTagFormat,
    InvalidMediaType,
    FileTooLarge,
    InvalidFileContent,
}

impl ValidationErrorKind {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidType => "invalid_type",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::InvalidUrlFormat => "invalid_url_format",
            Self::InvalidIdFormat => "invalid_id_format",
            Self::UnknownDiscriminant => "unknown_discriminant",
            Self::DiscriminantMismatch => "discriminant_mismatch",
            Self::UnexpectedField => "unexpected_field",
            Self::InvalidTagFormat => "invalid_tag_format",
            Self::InvalidMediaType => "invalid_media_type",
            Self::FileTooLarge => "file_too_large",
            Self::InvalidFileContent => "invalid_file_content",
        }
    }

    #[cfg(test)]
    pub fn from_code(code: &str) -> Option<Self> {
        let kind = match code {
            "missing_field" => Self::MissingField,
            "empty_field" => Self::EmptyField,
            "invalid_type" => Self::InvalidType,
            "length_out_of_range" => Self::LengthOutOfRange,
            "invalid_url_format" => Self::InvalidUrlFormat,
            "invalid_id_format" => Self::InvalidIdFormat,
            "unknown_discriminant" => Self::UnknownDiscriminant,
            "discriminant_mismatch" => Self::DiscriminantMismatch,
            "unexpected_field" => Self::UnexpectedField,
            "invalid_tag_format" => Self::InvalidTagFormat,
            "invalid_media_type" => Self::InvalidMediaType,
            "file_too_large" => Self::FileTooLarge,
            "invalid_file_content" => Self::InvalidFileContent,
            _ => return None,
        };

        Some(kind)
    }

    pub fn error(&self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        let mut error = ValidationError::new(self.value());
        error.message = Some(message.into());
        error
    }
}
