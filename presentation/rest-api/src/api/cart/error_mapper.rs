use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Status mapping for cart operations: every domain failure is a 400 (the
/// `GET` route surfaces an absent cart as 404 itself, since the use case
/// reports absence as a result rather than an error); only store failures
/// become 500s.
impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: self.code().to_string(),
            }),
        )
    }
}
