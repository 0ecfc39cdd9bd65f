//! Length bounds and messages for publication fields.

#[non_exhaustive]
pub struct PublicationValidationParams;

impl PublicationValidationParams {
    pub const TITLE_MIN_LENGTH: u64 = 20;
    pub const TITLE_MAX_LENGTH: u64 = 50;

    pub const ANNOUNCEMENT_MIN_LENGTH: u64 = 50;
    pub const ANNOUNCEMENT_MAX_LENGTH: u64 = 255;

    pub const TEXT_MIN_LENGTH: u64 = 100;
    pub const TEXT_MAX_LENGTH: u64 = 1024;

    pub const QUOTE_TEXT_MIN_LENGTH: u64 = 20;
    pub const QUOTE_TEXT_MAX_LENGTH: u64 = 300;

    pub const QUOTE_AUTHOR_MIN_LENGTH: u64 = 3;
    pub const QUOTE_AUTHOR_MAX_LENGTH: u64 = 50;

    pub const LINK_DESCRIPTION_MAX_LENGTH: u64 = 300;

    pub const TAGS_MAX_COUNT: usize = 8;
    pub const TAG_MIN_LENGTH: u64 = 3;
    pub const TAG_MAX_LENGTH: u64 = 10;

    pub const PHOTO_MAX_BYTES: usize = 1024 * 1024;
}

#[non_exhaustive]
pub struct PublicationValidationMessage;

impl PublicationValidationMessage {
    pub const TITLE_LENGTH: &'static str = "title must be between 20 and 50 characters.";
    pub const VIDEO_LINK_FORMAT: &'static str = "videoLink must be a valid http or https url.";

    pub const ANNOUNCEMENT_LENGTH: &'static str = "announcement must be between 50 and 255 characters.";
    pub const ANNOUNCEMENT_TEXT_LENGTH: &'static str =
        "announcementText must be between 100 and 1024 characters.";

    pub const QUOTE_TEXT_LENGTH: &'static str = "quoteText must be between 20 and 300 characters.";
    pub const QUOTE_AUTHOR_LENGTH: &'static str = "quoteAuthor must be between 3 and 50 characters.";

    pub const LINK_FORMAT: &'static str = "link must be a valid http or https url.";
    pub const LINK_DESCRIPTION_LENGTH: &'static str = "linkDescription must be at most 300 characters.";

    pub const USER_ID_FORMAT: &'static str = "userId must be a valid object id.";
    pub const STATE_INVALID: &'static str = "state must be one of draft, published.";

    pub const TAGS_INVALID: &'static str = "tags must be a list of { value } objects.";
    pub const TAGS_COUNT: &'static str = "a publication can have at most 8 tags.";
    pub const TAG_LENGTH: &'static str = "each tag must be between 3 and 10 characters.";
    pub const TAG_FORMAT: &'static str = "each tag must start with a letter and contain no whitespace.";
    pub const TAG_UNEXPECTED_FIELD: &'static str = "a tag may only carry a value.";

    pub const PHOTO_INVALID: &'static str = "photo must be an object with fileName, mimeType and data.";
    pub const PHOTO_MEDIA_TYPE: &'static str = "photo must be a jpeg or png image.";
    pub const PHOTO_SIZE: &'static str = "photo must be at most 1 MiB.";
    pub const PHOTO_CONTENT: &'static str = "photo data must be a base64 encoded image.";

    pub const TYPE_UNKNOWN: &'static str = "type must be one of video, text, quote, photo, link.";
    pub const TYPE_MISMATCH: &'static str = "type does not match the selected publication type.";
}
