pub mod create_comment_dto;
