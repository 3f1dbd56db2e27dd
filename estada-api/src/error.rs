use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use estada_core::CoreError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
            AppError::Anyhow(err) => match err.downcast_ref::<CoreError>() {
                Some(CoreError::ValidationError(msg)) | Some(CoreError::FormatError(msg)) => {
                    (StatusCode::BAD_REQUEST, msg.clone())
                }
                Some(CoreError::NotFoundError(msg)) => (StatusCode::NOT_FOUND, msg.clone()),
                Some(CoreError::IntegrityError(msg)) => (StatusCode::CONFLICT, msg.clone()),
                _ => {
                    tracing::error!("Internal Server Error: {}", err);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
                }
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}

/// Text shown to the user for a failed operation. Internal failures are
/// logged and replaced by `fallback`.
pub fn user_message(err: &CoreError, fallback: &str) -> String {
    if err.is_internal() {
        tracing::error!("{}", err);
        fallback.to_string()
    } else {
        err.to_string()
    }
}
