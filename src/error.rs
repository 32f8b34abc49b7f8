use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealprep_shared::Error;
use serde_json::json;

/// Maps domain errors onto HTTP statuses with a `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validate(_) | Error::User(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::EmptyCatalog => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Database(_) | Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");

            return (
                status,
                Json(json!({"error": "internal server error"})),
            )
                .into_response();
        }

        (status, Json(json!({"error": self.0.to_string()}))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
