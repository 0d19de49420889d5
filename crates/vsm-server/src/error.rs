//! Error types for vsm-server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for server setup.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Tree rejected the configuration or an operation
    #[error(transparent)]
    Tree(#[from] vsm_tree::Error),

    /// Environment variable could not be parsed
    #[error("invalid {var}: {value:?}")]
    Config { var: &'static str, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by request handlers.
#[derive(Debug)]
pub enum ApiError {
    Tree(vsm_tree::Error),
    BadRequest(String),
}

impl From<vsm_tree::Error> for ApiError {
    fn from(e: vsm_tree::Error) -> Self {
        ApiError::Tree(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        use vsm_tree::Error as E;
        match self {
            ApiError::Tree(E::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Tree(E::InvalidTag(_) | E::InvalidOrder { .. } | E::Geometry(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Tree(E::HasChildren { .. } | E::AlreadyInitialized(_)) => {
                StatusCode::CONFLICT
            }
            ApiError::Tree(E::DuplicateTag(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Tree(e) => ErrorBody {
                error: e.to_string(),
                kind: e.kind(),
            },
            ApiError::BadRequest(msg) => ErrorBody {
                error: msg.clone(),
                kind: "bad_request",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "internal error");
        }
        (status, Json(self.body())).into_response()
    }
}
