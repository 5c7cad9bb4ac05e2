use std::path::Path;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tokio::fs;

use super::{
    Env,
    error::{Error, HttpError},
    handlers,
};

/// Fallback for everything outside the api routes: OPTIONS preflight,
/// otherwise static files resolved against the configured web root.
pub async fn handler(State(env): State<Env>, request: Request) -> Result<Response, Error> {
    match *request.method() {
        Method::OPTIONS => Ok(handlers::preflight().await.into_response()),
        Method::GET => serve(&env.config.web_root, request.uri().path()).await,
        _ => Err(HttpError::NotFound(format!("not found: {}", request.uri().path())).into()),
    }
}

async fn serve(web_root: &Path, raw_path: &str) -> Result<Response, Error> {
    let path = percent_decode_str(raw_path)
        .decode_utf8()
        .map_err(|e| HttpError::BadRequest(format!("invalid path encoding: {}", e)))?;

    let relative = match &*path {
        "/" | "/index.html" => "index.html",
        other => other.trim_start_matches('/'),
    };

    let root = fs::canonicalize(web_root)
        .await
        .map_err(|_| HttpError::NotFound(format!("not found: {}", path)))?;

    // Containment is a structural check: resolve the candidate fully, then
    // require it to be the root or a descendant. A string-prefix
    // comparison would wave through sibling directories sharing a name
    // prefix with the root.
    let candidate = match fs::canonicalize(root.join(relative)).await {
        Ok(candidate) => candidate,
        Err(_) => return Err(HttpError::NotFound(format!("not found: {}", path)).into()),
    };
    if !candidate.starts_with(&root) {
        return Err(HttpError::Forbidden(format!("path escapes web root: {}", path)).into());
    }

    let bytes = fs::read(&candidate)
        .await
        .map_err(|_| HttpError::NotFound(format!("not found: {}", path)))?;

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(content_type(&candidate)),
        )],
        bytes,
    )
        .into_response())
}

/// Fixed extension table; anything else is an opaque download.
fn content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        _ => "application/octet-stream",
    }
}
