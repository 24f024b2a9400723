use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape of every error body: an HTTP status plus a code-style message.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
