use axum::http::StatusCode;
use tracing::error;

/// The only failures that reach a client are storage writes that could not
/// complete; everything else degrades to a no-op.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        error!(status = %self.status, "request failed: {}", self.message);
        (self.status, self.message).into_response()
    }
}
