use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::app::util::validation::field_errors;

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
struct ApiErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: &'a Vec<FieldError>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            message: &self.message,
            errors: &self.errors,
        };

        (self.code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let errors = field_errors(&errors)
            .into_iter()
            .map(|(field, error)| FieldError {
                field: field.to_string(),
                code: error.code.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
            .collect();

        Self {
            code: StatusCode::BAD_REQUEST,
            message: "Validation failed.".to_string(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;
    use crate::app::util::validation::ValidationErrorKind;

    #[test]
    fn validation_errors_become_a_sorted_field_list() {
        let mut errors = ValidationErrors::new();
        errors.add("userId", ValidationErrorKind::InvalidIdFormat.error("userId must be a valid id."));
        errors.add("title", ValidationError::new("custom"));

        let api_error = ApiError::from(errors);

        assert_eq!(api_error.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error.errors,
            vec![
                FieldError {
                    field: "title".to_string(),
                    code: "custom".to_string(),
                    message: "custom".to_string(),
                },
                FieldError {
                    field: "userId".to_string(),
                    code: "invalid_id_format".to_string(),
                    message: "userId must be a valid id.".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn response_carries_status_and_envelope() {
        let response = ApiError::new(StatusCode::NOT_FOUND, "Publication type not found.").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Publication type not found." }));
    }
}
