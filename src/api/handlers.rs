//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

use crate::catalog::{self, Product};
use crate::clock::{Clock, SystemClock};
use crate::error::ApiError;

/// API title shown in the root response and the OpenAPI document.
pub const API_NAME: &str = "SpeechPro API";
/// Public API version.
pub const API_VERSION: &str = "1.0.0";
/// Greeting returned by the welcome endpoint.
pub const WELCOME_MESSAGE: &str = "🎉 Welcome to SpeechPro! Your trusted source for professional speech pathology equipment. We're delighted to serve you!";

/// Endpoints advertised by the root route, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, Display)]
pub enum Endpoint {
    /// Welcome greeting.
    #[strum(serialize = "/api/welcome")]
    Welcome,
    /// Product catalog.
    #[strum(serialize = "/api/products")]
    Products,
    /// Swagger UI.
    #[strum(serialize = "/docs")]
    Docs,
}

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source of response timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new app state backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Create app state with a specific clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root discovery response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Greeting.
    pub message: String,
    /// API version.
    pub version: String,
    /// Documented endpoint paths.
    pub endpoints: Vec<String>,
}

/// Welcome greeting response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: String,
    /// ISO-8601 instant the response was generated.
    pub timestamp: String,
    /// Always "success".
    pub status: String,
}

/// Product listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    /// Every catalog entry, in catalog order.
    pub products: Vec<Product>,
    /// Number of entries in `products`.
    pub total: usize,
}

impl ProductResponse {
    /// Build a response whose total always matches the product count.
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len();
        Self { products, total }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: String,
    /// ISO-8601 instant the check was answered.
    pub timestamp: String,
}

/// Root endpoint listing the available routes.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "API discovery information", body = RootResponse)),
    tag = "meta"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", API_NAME),
        version: API_VERSION.to_string(),
        endpoints: Endpoint::iter().map(|e| e.to_string()).collect(),
    })
}

/// Welcome greeting for the storefront frontend.
#[utoipa::path(
    get,
    path = "/api/welcome",
    responses((status = 200, description = "Welcome greeting", body = WelcomeResponse)),
    tag = "storefront"
)]
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
        timestamp: state.clock.timestamp(),
        status: "success".to_string(),
    })
}

/// Full product catalog.
#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "All available products", body = ProductResponse)),
    tag = "storefront"
)]
pub async fn products() -> Json<ProductResponse> {
    Json(ProductResponse::new(catalog::products().to_vec()))
}

/// Health check handler - always returns 200 while the process is up.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse)),
    tag = "meta"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: state.clock.timestamp(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
