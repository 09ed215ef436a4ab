use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use inventory_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Lets handlers use `?` on repository calls. Repository errors keep their
/// mapped status; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        self.0
            .downcast_ref::<RepositoryError>()
            .map(repository_error_to_status_code)
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code == StatusCode::NOT_FOUND {
            return status_code.into_response();
        }

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Application error");
        } else {
            tracing::warn!(error = %self.0, status = %status_code, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
