use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pricing::errors::PricingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PricingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PricingError::NegativeAmount => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pricing.negative_amount",
            ),
            PricingError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "pricing.not_found"),
            PricingError::Repository(_) => (
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
