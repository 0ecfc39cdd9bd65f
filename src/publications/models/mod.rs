pub mod photo_file;
pub mod tag;
