//! SpeechPro equipment store API.
//!
//! A small read-only JSON service backing the SpeechPro storefront. It serves a
//! discovery document, a welcome greeting, a fixed product catalog and a health
//! check, plus generated OpenAPI docs:
//!
//! ```text
//! GET /               discovery: name, version, endpoints
//! GET /api/welcome    greeting + timestamp
//! GET /api/products   six-item catalog + total
//! GET /health         liveness probe
//! GET /docs           Swagger UI (schema at /openapi.json)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`catalog`]: The static product catalog
//! - [`clock`]: Timestamp source for responses
//! - [`api`]: HTTP routes, handlers and OpenAPI docs
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`server`]: Listener setup and graceful shutdown
//! - [`utils`]: Utility functions

pub mod api;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, Result};
