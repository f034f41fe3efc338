//! HTTP API route definitions.

use std::any::Any;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH};
use super::handlers::{health, not_found, products, root, welcome, AppState, Endpoint};
use crate::error::{ApiError, ErrorBody};
use crate::metrics::track_http;

/// Create the API router with all middleware applied.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route(Endpoint::Welcome.as_ref(), get(welcome))
        .route(Endpoint::Products.as_ref(), get(products))
        .route("/health", get(health))
        .route_layer(middleware::from_fn(track_http))
        .merge(SwaggerUi::new(Endpoint::Docs.as_ref()).url(OPENAPI_PATH, ApiDoc::openapi()))
        .fallback(not_found)
        .with_state(state);

    with_middleware(api)
}

/// Wrap a router in the tracing, panic and CORS layers shared by every route.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
}

/// Any origin, method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so each request's own
/// origin, method and headers are echoed back instead.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {}", reason);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: ApiError::Internal.to_string(),
        }),
    )
        .into_response()
}
