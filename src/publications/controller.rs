use axum::{extract::Path, Json};
use serde_json::Value;

use crate::app::models::{api_error::ApiError, json_from_request::JsonFromRequest};

use super::{
    dtos::create_publication_dto::CreatePublicationDto,
    enums::publication_type::PublicationType,
    errors::PublicationsApiError,
    schema,
};

pub async fn create_publication(
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<CreatePublicationDto>, ApiError> {
    match schema::validate_publication(&payload) {
        Ok(dto) => {
            tracing::debug!(
                publication_type = dto.publication_type().value(),
                user_id = %dto.base().user_id,
                "validated publication payload"
            );
            Ok(Json(dto))
        }
        Err(e) => {
            tracing::debug!(errors = ?e, "rejected publication payload");
            Err(e.into())
        }
    }
}

pub async fn create_publication_by_type(
    Path(publication_type): Path<String>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<CreatePublicationDto>, ApiError> {
    let Ok(publication_type) = publication_type.parse::<PublicationType>() else {
        return Err(PublicationsApiError::PublicationTypeNotFound.value());
    };

    match publication_type.schema().validate(&payload) {
        Ok(dto) => Ok(Json(dto)),
        Err(e) => {
            tracing::debug!(
                publication_type = publication_type.value(),
                errors = ?e,
                "rejected publication payload"
            );
            Err(e.into())
        }
    }
}
