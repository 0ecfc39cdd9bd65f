pub mod create_link_publication_dto;
pub mod create_photo_publication_dto;
pub mod create_publication_dto;
pub mod create_quote_publication_dto;
pub mod create_text_publication_dto;
pub mod create_video_publication_dto;
