use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::{Env, handlers, statics};

pub fn new(env: Env) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route(
                    "/addresses",
                    get(handlers::list_addresses)
                        .post(handlers::create_address)
                        .options(handlers::preflight),
                )
                .route(
                    "/addresses/{key}",
                    put(handlers::update_address)
                        .delete(handlers::delete_address)
                        .options(handlers::preflight),
                ),
        )
        .fallback(statics::handler)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .with_state(env)
}
