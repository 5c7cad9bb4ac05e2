use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store;

/// Client-addressable failures, one variant per HTTP status this API can
/// answer with.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Forbidden(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<store::Error> for Error {
    fn from(e: store::Error) -> Self {
        match e {
            store::Error::Conflict(_) => HttpError::Conflict(e.to_string()).into(),
            store::Error::NotFound(_) => HttpError::NotFound(e.to_string()).into(),
            store::Error::MissingField(_) => HttpError::BadRequest(e.to_string()).into(),
            store::Error::Io(_) | store::Error::Json(_) => Error::Internal(e.into()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::Http(HttpError::BadRequest(m)) => (StatusCode::BAD_REQUEST, m),
            Error::Http(HttpError::NotFound(m)) => (StatusCode::NOT_FOUND, m),
            Error::Http(HttpError::Conflict(m)) => (StatusCode::CONFLICT, m),
            Error::Http(HttpError::Forbidden(m)) => (StatusCode::FORBIDDEN, m),
            Error::Internal(e) => {
                error!("Internal error handling request: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        let mut response = (status, Json(ErrorBody { error: message })).into_response();
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}
