use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use stormtracker_core::{seed, NewStorm, Result, StoreError, Storm, StormStore};
use stormtracker_gateway::{App, AppState};
use stormtracker_storage::InMemoryStormStore;
use tower::ServiceExt;

fn router_with(store: Arc<dyn StormStore>) -> Router {
    App::router(AppState::new(store))
}

async fn seeded_router() -> Router {
    let store = InMemoryStormStore::new();
    seed(&store).await.unwrap();
    router_with(Arc::new(store))
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn hurricane_body() -> Value {
    json!({
        "startDate": "25-08-2019",
        "endDate": "05-09-2019",
        "startLocation": "Coast of Africa",
        "endLocation": "North Carolina",
        "type": "Hurricane",
        "intensity": 5
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let router = router_with(Arc::new(InMemoryStormStore::new()));

    let response = send(&router, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn list_returns_seeded_storms() {
    let router = seeded_router().await;

    let response = send(&router, get("/api/v1/storms")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let storms = body.as_array().unwrap();
    assert_eq!(storms.len(), 2);
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let router = router_with(Arc::new(InMemoryStormStore::new()));

    let response = send(&router, get("/api/v1/storms")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn get_returns_seeded_storm_with_id_ten() {
    let router = seeded_router().await;

    let response = send(&router, get("/api/v1/storms/10")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 10);
    assert_eq!(body["startLocation"], "Gulf of Mexico");
}

#[tokio::test]
async fn get_missing_storm_is_404() {
    let router = seeded_router().await;

    let response = send(&router, get("/api/v1/storms/999")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "storm not found: 999");
}

#[tokio::test]
async fn get_with_non_numeric_id_is_400() {
    let router = seeded_router().await;

    let response = send(&router, get("/api/v1/storms/abc")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_then_get_round_trips_all_fields() {
    let router = router_with(Arc::new(InMemoryStormStore::new()));

    let response = send(
        &router,
        post_json("/api/v1/storms", hurricane_body().to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(location, "/api/v1/storms/10");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    let response = send(&router, get(&location)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut expected = hurricane_body();
    expected["id"] = json!(10);
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let router = seeded_router().await;
    let mut body = hurricane_body();
    body["id"] = json!(1);

    let response = send(&router, post_json("/api/v1/storms", body.to_string())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/storms/12"
    );
}

#[tokio::test]
async fn create_with_malformed_body_is_400() {
    let store = Arc::new(InMemoryStormStore::new());
    let router = router_with(store.clone());

    let response = send(&router, post_json("/api/v1/storms", "{not json".to_string())).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &router,
        post_json("/api/v1/storms", json!({"startDate": "x"}).to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn search_filters_by_exact_start_location() {
    let router = seeded_router().await;
    send(
        &router,
        post_json("/api/v1/storms", hurricane_body().to_string()),
    )
    .await;

    let response = send(
        &router,
        get("/api/v1/storms/search?startLocation=Coast%20of%20Africa"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let storms = body.as_array().unwrap();
    assert_eq!(storms.len(), 2);
    assert!(storms
        .iter()
        .all(|storm| storm["startLocation"] == "Coast of Africa"));
}

#[tokio::test]
async fn search_without_match_is_empty_array() {
    let router = seeded_router().await;

    let response = send(
        &router,
        get("/api/v1/storms/search?startLocation=coast%20of%20africa"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn search_does_not_ignore_trailing_spaces() {
    let router = seeded_router().await;

    let response = send(
        &router,
        get("/api/v1/storms/search?startLocation=Coast%20of%20Africa%20%20%20"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_after_ids_run_out_is_500_without_detail() {
    let store = InMemoryStormStore::with_offset(i64::MAX - 1).unwrap();
    let router = router_with(Arc::new(store));

    let response = send(
        &router,
        post_json("/api/v1/storms", hurricane_body().to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        &router,
        post_json("/api/v1/storms", hurricane_body().to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"error": "internal server error"})
    );
}

#[tokio::test]
async fn search_without_start_location_is_400() {
    let router = seeded_router().await;

    let response = send(&router, get("/api/v1/storms/search")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

struct UnavailableStore;

#[async_trait]
impl StormStore for UnavailableStore {
    async fn add(&self, _storm: NewStorm) -> Result<Storm> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get_all(&self) -> Result<Vec<Storm>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Storm> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_start_location(&self, _location: &str) -> Result<Vec<Storm>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn count(&self) -> Result<u64> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn unavailable_storage_is_503() {
    let router = router_with(Arc::new(UnavailableStore));

    let response = send(&router, get("/api/v1/storms")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({"error": "storage temporarily unavailable"})
    );

    let response = send(
        &router,
        post_json("/api/v1/storms", hurricane_body().to_string()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
