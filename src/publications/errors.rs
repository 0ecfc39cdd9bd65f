use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PublicationsApiError {
    PublicationTypeNotFound,
}

impl PublicationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PublicationTypeNotFound => ApiError::new(
                StatusCode::NOT_FOUND,
                "Publication type not found.",
            ),
        }
    }
}
