use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::employees::adapters::outbound::in_memory::InMemoryEmployeeRepository;
use crate::modules::employees::adapters::outbound::sqlite::SqliteEmployeeRepository;
use crate::modules::employees::core::ports::EmployeeRepository;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(state: &AppState, method: &str, uri: &str, body: Option<&str>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    router(state.clone())
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn run_lifecycle(repository: Arc<dyn EmployeeRepository>) {
    let state = AppState::new(repository);

    let created = send(
        &state,
        "POST",
        "/api/employees",
        Some(r#"{"firstName":"A","lastName":"B","email":"a@x"}"#),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json(created).await;
    assert_eq!(created["firstName"], "A");
    assert_eq!(created["lastName"], "B");
    assert_eq!(created["email"], "a@x");
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    let uri = format!("/api/employees/{id}");

    let fetched = send(&state, "GET", &uri, None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json(fetched).await, created);

    let updated = send(
        &state,
        "PUT",
        &uri,
        Some(r#"{"firstName":"C","lastName":"B","email":"a@x"}"#),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json(updated).await;
    assert_eq!(updated["firstName"], "C");
    assert_eq!(updated["id"], id);

    let duplicate = send(
        &state,
        "POST",
        "/api/employees",
        Some(r#"{"firstName":"D","lastName":"E","email":"a@x"}"#),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let listed = send(&state, "GET", "/api/employees", None).await;
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(json(listed).await, serde_json::json!([updated]));

    let deleted = send(&state, "DELETE", &uri, None).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = send(&state, "GET", &uri, None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employee_lifecycle_over_http_with_in_memory_storage() {
    run_lifecycle(Arc::new(InMemoryEmployeeRepository::new())).await;
}

#[tokio::test]
async fn employee_lifecycle_over_http_with_sqlite_storage() {
    let repository = SqliteEmployeeRepository::connect_in_memory().await.unwrap();
    run_lifecycle(Arc::new(repository)).await;
}
