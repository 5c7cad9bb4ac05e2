use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;

use super::error::Error;

/// JSON response carrying the permissive CORS header every API answer in
/// this service has.
#[derive(Debug)]
pub struct Response<T: Serialize> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> Response<T> {
    pub fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let mut response = (self.status, Json(self.body)).into_response();
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}

impl<T: Serialize> From<T> for Response<T> {
    fn from(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

pub type Result<T> = std::result::Result<Response<T>, Error>;
