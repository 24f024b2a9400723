use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::card::errors::CardError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CardError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CardError::NameEmpty => (StatusCode::BAD_REQUEST, "ValidationError", "card.name_empty"),
            CardError::NegativePrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "card.negative_price",
            ),
            CardError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "card.not_found"),
            CardError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
