//! HTTP-facing error type. The analyzer itself never fails; everything here
//! belongs to request validation and fixture I/O.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Unreadable request body (bad JSON syntax, wrong shape of bytes).
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Body not declared as `application/json`.
    #[error("Unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    /// Well-formed JSON that fails the schema or a size bound.
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::UnsupportedMediaType { .. } => "unsupported_media_type",
            ApiError::Validation { .. } => "validation",
            ApiError::Storage(_) => "storage",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Validation { message },
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType { message },
            _ => ApiError::BadRequest { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!(error = ?e, "transaction store failure");
                "transaction data unavailable".to_string()
            }
            ApiError::BadRequest { message }
            | ApiError::UnsupportedMediaType { message }
            | ApiError::Validation { message } => message.clone(),
        };
        let body = json!({ "error": self.kind(), "message": message });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_by_kind() {
        let v = ApiError::Validation {
            message: "too long".into(),
        };
        assert_eq!(v.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(v.kind(), "validation");

        let s = ApiError::from(anyhow::anyhow!("disk full"));
        assert_eq!(s.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(s.to_string().contains("disk full"));
    }
}
