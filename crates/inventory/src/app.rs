use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::{
    context::{normalize_correlation_id, CORRELATION_ID_HEADER},
    handlers::{
        health::{livez, readyz},
        items::{create_item, delete_item, get_item, list_items, update_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        );

    let routes = Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes);

    with_middleware(routes, state.request_timeout).with_state(state)
}

/// Wraps routes in the timeout, tracing and correlation id layers.
///
/// Layers wrap everything added before them: the header is normalized first,
/// then the correlation id is set, so the trace span and the handlers both
/// see the same value.
fn with_middleware(routes: Router<AppState>, request_timeout: Duration) -> Router<AppState> {
    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);

    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(PropagateRequestIdLayer::new(correlation_header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::new(correlation_header, MakeRequestUuid))
        .layer(middleware::from_fn(normalize_correlation_id))
}

/// Per-request span carrying the correlation id.
fn make_request_span(request: &Request<Body>) -> Span {
    let correlation_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        correlation_id = %correlation_id,
    )
}
