use axum::Json;
use serde_json::Value;

use crate::app::models::{api_error::ApiError, json_from_request::JsonFromRequest};

use super::dtos::create_comment_dto::CreateCommentDto;

pub async fn create_comment(
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<CreateCommentDto>, ApiError> {
    match CreateCommentDto::from_value(&payload) {
        Ok(dto) => Ok(Json(dto)),
        Err(e) => {
            tracing::debug!(errors = ?e, "rejected comment payload");
            Err(e.into())
        }
    }
}
