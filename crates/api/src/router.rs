//! HTTP entry point: the route tree wrapped in its middleware.
//!
//! `main` and the integration tests both call [`build_app_router`], so a test
//! request passes through the same layers as production traffic.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Methods the browser client uses.
const CORS_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// How long a browser may cache a preflight response.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// `/health` at the root, everything else under `/api`, all behind
/// [`with_middleware`].
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes());

    with_middleware(routes, config).with_state(state)
}

/// Wrap `router` in the request pipeline.
///
/// A request meets CORS first, is then tagged with a request id and traced,
/// and finally runs under the timeout with panics turned into 500s. The
/// request id is copied onto the response on the way out.
fn with_middleware(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));
    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    );

    // `layer` wraps outside-in, so the innermost layer is added first.
    router
        .layer(CatchPanicLayer::new())
        .layer(timeout)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(&config.cors_origins))
}

/// CORS for the configured browser origins, with credentials allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(origins))
        .allow_methods(CORS_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// Parse origins into header values. Unparseable entries are logged and left
/// out rather than taking the server down.
fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
