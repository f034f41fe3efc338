//! OpenAPI document for the SpeechPro API.
//!
//! Served as JSON at `/openapi.json` and rendered by Swagger UI at `/docs`.

use utoipa::OpenApi;

use super::handlers::{HealthResponse, ProductResponse, RootResponse, WelcomeResponse};
use crate::catalog::Product;
use crate::error::Result;

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SpeechPro API",
        description = "REST API for Speech Pathology Equipment Store",
        version = "1.0.0"
    ),
    paths(
        crate::api::handlers::root,
        crate::api::handlers::welcome,
        crate::api::handlers::products,
        crate::api::handlers::health,
    ),
    components(schemas(
        RootResponse,
        WelcomeResponse,
        ProductResponse,
        Product,
        HealthResponse
    )),
    tags(
        (name = "storefront", description = "Storefront data for the frontend"),
        (name = "meta", description = "Discovery and liveness")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document rendered as pretty-printed JSON.
pub fn openapi_json() -> Result<String> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
