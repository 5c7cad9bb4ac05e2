use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use indexmap::IndexMap;
use serde::Serialize;

use crate::store::AddressRecord;

use super::{
    Env,
    error::{Error, HttpError},
    result::{Response, Result},
};

#[derive(Debug, Serialize)]
pub struct Message {
    message: &'static str,
}

impl Message {
    fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Parsed by hand rather than through the Json extractor: malformed input
/// must get the same JSON error payload and CORS header as every other
/// failure.
fn parse_record(body: &Bytes) -> std::result::Result<AddressRecord, Error> {
    serde_json::from_slice(body)
        .map_err(|e| HttpError::BadRequest(format!("invalid JSON body: {}", e)).into())
}

pub async fn list_addresses(State(env): State<Env>) -> Result<IndexMap<String, AddressRecord>> {
    let store = env.store.read().await;
    Ok(store.all().clone().into())
}

pub async fn create_address(State(env): State<Env>, body: Bytes) -> Result<Message> {
    let record = parse_record(&body)?;
    let key = record.key();
    let mut store = env.store.write().await;
    store.create(key, record)?;
    Ok(Response::created(Message::new("created")))
}

pub async fn update_address(
    State(env): State<Env>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<Message> {
    let mut store = env.store.write().await;
    // An unknown key is 404 before the body is even looked at.
    if !store.contains_key(&key) {
        return Err(HttpError::NotFound(format!("no entry for key: {}", key)).into());
    }
    let record = parse_record(&body)?;
    store.update(&key, record)?;
    Ok(Message::new("updated").into())
}

pub async fn delete_address(State(env): State<Env>, Path(key): Path<String>) -> Result<Message> {
    let mut store = env.store.write().await;
    store.delete(&key)?;
    Ok(Message::new("deleted").into())
}

/// CORS preflight: 204 with the allow headers, no body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ],
    )
}
