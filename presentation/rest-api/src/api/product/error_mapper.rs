use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty
            | ProductError::NegativePrice
            | ProductError::NegativeStock
            | ProductError::InvalidSort => {
                (StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),
            ProductError::Repository(inner) => {
                tracing::error!(error = %inner, "Product storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    inner.to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
