//! Integration tests for the SpeechPro API.
//!
//! These drive the full router in-process, middleware included.
//! Run with: cargo test --test integration

use std::collections::HashSet;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use speechpro_api::api::handlers::{HealthResponse, ProductResponse, RootResponse, WelcomeResponse};
use speechpro_api::api::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::new())
}

async fn get<T: DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn parse_instant(stamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(stamp)
        .unwrap_or_else(|e| panic!("{stamp:?} is not ISO-8601: {e}"))
        .with_timezone(&Utc)
}

/// Products come back complete, ordered, and counted.
#[tokio::test]
async fn test_products_are_complete_and_ordered() {
    let (status, body): (_, ProductResponse) = get(app(), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.total, body.products.len());

    let ids: Vec<u32> = body.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    for product in &body.products {
        assert!(!product.price.is_sign_negative());
        assert!(product.in_stock);
    }

    let names: Vec<&str> = body.products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Professional Laryngoscope Kit",
            "Articulation Cards Set",
            "Voice Amplifier System",
            "Oral Motor Therapy Kit",
            "Fluency Master Device",
            "Therapy Mirror Stand",
        ]
    );
}

/// Timestamps parse and never go backwards within one process.
#[tokio::test]
async fn test_timestamps_are_iso8601_and_non_decreasing() {
    let app = app();
    let mut prev: Option<DateTime<Utc>> = None;

    for i in 0..20 {
        let stamp = if i % 2 == 0 {
            let (status, body): (_, WelcomeResponse) = get(app.clone(), "/api/welcome").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.status, "success");
            body.timestamp
        } else {
            let (status, body): (_, HealthResponse) = get(app.clone(), "/health").await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body.status, "healthy");
            body.timestamp
        };

        let instant = parse_instant(&stamp);
        if let Some(prev) = prev {
            assert!(instant >= prev, "{instant} went behind {prev}");
        }
        prev = Some(instant);
    }
}

/// Two calls differ in nothing but the timestamp.
#[tokio::test]
async fn test_repeated_calls_only_differ_in_timestamp() {
    let app = app();

    let (_, first): (_, RootResponse) = get(app.clone(), "/").await;
    let (_, second): (_, RootResponse) = get(app.clone(), "/").await;
    assert_eq!(first, second);

    let (_, first): (_, ProductResponse) = get(app.clone(), "/api/products").await;
    let (_, second): (_, ProductResponse) = get(app.clone(), "/api/products").await;
    assert_eq!(first, second);

    let (_, mut first): (_, WelcomeResponse) = get(app.clone(), "/api/welcome").await;
    let (_, mut second): (_, WelcomeResponse) = get(app.clone(), "/api/welcome").await;
    first.timestamp.clear();
    second.timestamp.clear();
    assert_eq!(first, second);

    let (_, mut first): (_, HealthResponse) = get(app.clone(), "/health").await;
    let (_, mut second): (_, HealthResponse) = get(app, "/health").await;
    first.timestamp.clear();
    second.timestamp.clear();
    assert_eq!(first, second);
}

/// Root advertises the documented paths, and each of them resolves.
#[tokio::test]
async fn test_advertised_endpoints_resolve() {
    let (status, root): (_, RootResponse) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(root.endpoints, vec!["/api/welcome", "/api/products", "/docs"]);

    for path in &root.endpoints {
        let response = app()
            .oneshot(Request::builder().uri(path.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(
            response.status().is_success() || response.status().is_redirection(),
            "{} returned {}",
            path,
            response.status()
        );
    }
}

/// Unknown paths are a plain 404.
#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (status, body): (_, serde_json::Value) = get(app(), "/unknown-path").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

/// Concurrent requests are independent of one another.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_are_independent() {
    let app = app();
    let handles: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, body): (_, ProductResponse) = get(app, "/api/products").await;
                (status, body.total)
            })
        })
        .collect();

    for handle in handles {
        let (status, total) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(total, 6);
    }
}
