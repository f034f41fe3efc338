//! HTTP API module: storefront routes, health check and API docs.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::{openapi_json, ApiDoc};
pub use handlers::AppState;
pub use routes::create_router;
