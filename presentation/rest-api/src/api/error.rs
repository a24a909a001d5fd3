use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Failure body returned by every endpoint: a human-readable message plus
/// the stable condition code clients branch on.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
