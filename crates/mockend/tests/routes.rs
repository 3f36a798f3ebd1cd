mod support;

use mockend::{server::router, Db};
use support::MemoryDriver;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let db = Db::from_driver(MemoryDriver::new(), support::teacher())
        .await
        .unwrap();
    router(db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

#[tokio::test]
async fn create_returns_the_stored_record() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/model",
        Some(r#"{"name":"Ada","age":"36","active":true,"hired":"2024-03-01T00:00:00Z","extra":1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Ada",
            "age": 36,
            "active": true,
            "hired": "2024-03-01T00:00:00.000Z",
        })
    );
}

#[tokio::test]
async fn create_then_find_all_and_find_by_id() {
    let app = app().await;

    send(&app, Method::POST, "/api/model", Some(r#"{"name":"Ada"}"#)).await;
    send(&app, Method::POST, "/api/model", Some(r#"{"name":"Grace"}"#)).await;

    let (status, body) = send(&app, Method::GET, "/api/model", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "name": "Ada" }, { "id": 2, "name": "Grace" }])
    );

    let (status, body) = send(&app, Method::GET, "/api/model/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "name": "Grace" }));
}

#[tokio::test]
async fn find_all_on_empty_store() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/model", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn update_applies_declared_fields() {
    let app = app().await;

    send(
        &app,
        Method::POST,
        "/api/model",
        Some(r#"{"name":"Ada","age":36}"#),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/model/1",
        Some(r#"{"age":37,"unknown":"x"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "name": "Ada", "age": 37 }));

    let (_, body) = send(&app, Method::GET, "/api/model/1", None).await;
    assert_eq!(body, json!({ "id": 1, "name": "Ada", "age": 37 }));
}

#[tokio::test]
async fn delete_then_lookup_is_not_found() {
    let app = app().await;

    send(&app, Method::POST, "/api/model", Some(r#"{"name":"Ada"}"#)).await;

    let (status, body) = send(&app, Method::DELETE, "/api/model/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Item deleted" }));

    let (status, body) = send(&app, Method::GET, "/api/model/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Item not found" }));

    let (status, body) = send(&app, Method::DELETE, "/api/model/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Item not found" }));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app().await;

    for uri in ["/api/model/42", "/api/model/not-an-id"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri={uri}");
        assert_eq!(body, json!({ "message": "Item not found" }));

        let (status, body) = send(&app, Method::PUT, uri, Some(r#"{"name":"x"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri={uri}");
        assert_eq!(body, json!({ "message": "Item not found" }));

        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri={uri}");
        assert_eq!(body, json!({ "message": "Item not found" }));
    }
}

#[tokio::test]
async fn uncastable_value_is_a_bad_request() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/model",
        Some(r#"{"name":"Ada","age":"old"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "invalid value for field `age`: cannot cast \"old\" to number" })
    );

    let (_, body) = send(&app, Method::GET, "/api/model", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/api/model", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "body={body}");

    send(&app, Method::POST, "/api/model", Some(r#"{"name":"Ada"}"#)).await;

    let (status, body) = send(&app, Method::PUT, "/api/model/1", Some("[1,2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "body={body}");
}

#[tokio::test]
async fn non_object_body_is_a_bad_request() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/api/model", Some("[]")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "invalid request body: expected a JSON object" })
    );
}
