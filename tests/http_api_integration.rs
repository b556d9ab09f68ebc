//! Behavioural integration tests for the HTTP boundary.
//!
//! These tests drive the full router over the in-memory repository,
//! verifying the wire contract: routes, status codes, JSON bodies, and
//! error translation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes into JSON values after shape checks"
)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::{Value, json};
use tareas::http;
use tareas::task::adapters::memory::InMemoryTaskRepository;
use tareas::task::domain::{Task, TaskId, TaskPatch};
use tareas::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use tareas::task::services::TaskRecordService;
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    let service = Arc::new(TaskRecordService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    ));
    http::router(service, http::cors_layer(&[]))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should be handled");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, value)
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_201_with_full_record() {
    let app = app();
    let (status, body) = send_json(
        &app,
        json_request("POST", "/api/tasks", &json!({"title": "Comprar pan"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Comprar pan");
    assert_eq!(body["description"], "");
    assert_eq!(body["completed"], false);
    assert!(body["createdAt"].is_string());
    let id = body["id"].as_str().expect("id should be a string");
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_title_returns_400() {
    let app = app();
    for payload in [json!({}), json!({"title": ""}), json!({"title": "   "})] {
        let (status, body) = send_json(&app, json_request("POST", "/api/tasks", &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "El título es requerido");
    }

    // No record may have been persisted by the rejected creates.
    let (_, tasks) = send_json(&app, empty_request("GET", "/api/tasks")).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn client_supplied_id_on_create_is_ignored() {
    let app = app();
    let supplied = Uuid::new_v4().to_string();
    let (status, body) = send_json(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            &json!({"title": "Comprar pan", "id": supplied}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], Value::String(supplied));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_with_malformed_id_returns_400() {
    let app = app();
    let (status, body) = send_json(
        &app,
        empty_request("GET", "/api/tasks/not-a-valid-id-format"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID inválido");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_with_absent_id_returns_404() {
    let app = app();
    let uri = format!("/api/tasks/{}", Uuid::new_v4());
    let (status, body) = send_json(&app, empty_request("GET", &uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Tarea no encontrada");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_newest_first() {
    let app = app();
    let (_, first) = send_json(
        &app,
        json_request("POST", "/api/tasks", &json!({"title": "Primera"})),
    )
    .await;
    let (_, second) = send_json(
        &app,
        json_request("POST", "/api/tasks", &json!({"title": "Segunda"})),
    )
    .await;

    let (status, tasks) = send_json(&app, empty_request("GET", "/api/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks[0]["id"], second["id"]);
    assert_eq!(tasks[1]["id"], first["id"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_preserves_omitted_fields() {
    let app = app();
    let (_, created) = send_json(
        &app,
        json_request(
            "POST",
            "/api/tasks",
            &json!({"title": "Comprar pan", "description": "integral"}),
        ),
    )
    .await;
    let id = created["id"].as_str().expect("id should be a string");

    let uri = format!("/api/tasks/{id}");
    let (status, updated) =
        send_json(&app, json_request("PUT", &uri, &json!({"completed": true}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["title"], "Comprar pan");
    assert_eq!(updated["description"], "integral");
    assert_eq!(updated["completed"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_blank_title_returns_400() {
    let app = app();
    let (_, created) = send_json(
        &app,
        json_request("POST", "/api/tasks", &json!({"title": "Comprar pan"})),
    )
    .await;
    let id = created["id"].as_str().expect("id should be a string");

    let uri = format!("/api/tasks/{id}");
    let (status, body) = send_json(&app, json_request("PUT", &uri, &json!({"title": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El título es requerido");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_204_with_empty_body_then_404() {
    let app = app();
    let (_, created) = send_json(
        &app,
        json_request("POST", "/api/tasks", &json!({"title": "Comprar pan"})),
    )
    .await;
    let id = created["id"].as_str().expect("id should be a string");
    let uri = format!("/api/tasks/{id}");

    let (status, body) = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send_json(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Repository whose every operation fails, for probing error paths at
/// the wire level.
#[derive(Debug, Clone, Default)]
struct UnreachableStore;

fn unreachable() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection refused"))
}

#[async_trait::async_trait]
impl TaskRepository for UnreachableStore {
    async fn insert(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(unreachable())
    }

    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(unreachable())
    }

    async fn update_by_id(
        &self,
        _id: TaskId,
        _patch: &TaskPatch,
    ) -> TaskRepositoryResult<Option<Task>> {
        Err(unreachable())
    }

    async fn delete_by_id(&self, _id: TaskId) -> TaskRepositoryResult<bool> {
        Err(unreachable())
    }

    async fn ping(&self) -> TaskRepositoryResult<()> {
        Err(unreachable())
    }
}

fn app_with_unreachable_store() -> Router {
    let service = Arc::new(TaskRecordService::new(
        Arc::new(UnreachableStore),
        Arc::new(DefaultClock),
    ));
    http::router(service, http::cors_layer(&[]))
}

#[tokio::test(flavor = "multi_thread")]
async fn health_stays_200_when_store_is_unreachable() {
    let app = app_with_unreachable_store();
    for path in ["/health", "/healthz"] {
        let (status, body) = send_json(&app, empty_request("GET", path)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK", "db": "disconnected"}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn store_failure_returns_generic_500() {
    let app = app_with_unreachable_store();
    let (status, body) = send_json(&app, empty_request("GET", "/api/tasks")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error interno del servidor");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_endpoints_report_connected_store() {
    let app = app();
    for path in ["/health", "/healthz"] {
        let (status, body) = send_json(&app, empty_request("GET", path)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "OK", "db": "connected"}));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unmatched_route_returns_json_404() {
    let app = app();
    let (status, body) = send_json(&app, empty_request("GET", "/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint no encontrado");
}
