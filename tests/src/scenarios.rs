use crate::Context;

use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use serde_json::json;

pub async fn crud_round_trip(cx: Context) {
    let backend = cx.start().await;

    let (status, created) = backend
        .send(
            Method::POST,
            None,
            Some(json!({
                "name": "Ada",
                "age": 36,
                "active": true,
                "hired": "2024-03-01T00:00:00Z",
                "unknown": "dropped",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["age"], 36);
    assert_eq!(created["active"], true);
    assert_eq!(created["hired"], "2024-03-01T00:00:00.000Z");
    assert!(created.get("unknown").is_none(), "created={created}");

    let id = backend.id_of(&created);

    let (status, all) = backend.send(Method::GET, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([created]));

    let (status, found) = backend.send(Method::GET, Some(&id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let (status, updated) = backend
        .send(Method::PUT, Some(&id), Some(json!({ "age": "37" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 37);
    assert_eq!(updated["name"], "Ada");
    assert_eq!(backend.id_of(&updated), id);

    let (status, body) = backend.send(Method::DELETE, Some(&id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Item deleted" }));

    let (status, body) = backend.send(Method::GET, Some(&id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Item not found" }));

    backend.shutdown().await;
}

pub async fn create_many_then_find_all(cx: Context) {
    let backend = cx.start().await;

    for name in ["Ada", "Grace", "Barbara"] {
        let (status, _) = backend
            .send(Method::POST, None, Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = backend.send(Method::GET, None, None).await;
    assert_eq!(status, StatusCode::OK);

    let mut names: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();

    assert_eq!(names, ["Ada", "Barbara", "Grace"]);

    backend.shutdown().await;
}

pub async fn uncastable_value_is_rejected(cx: Context) {
    let backend = cx.start().await;

    let (status, body) = backend
        .send(Method::POST, None, Some(json!({ "name": "Ada", "age": "old" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "body={body}");

    let (_, all) = backend.send(Method::GET, None, None).await;
    assert_eq!(all, json!([]));

    backend.shutdown().await;
}

pub async fn unknown_ids_are_not_found(cx: Context) {
    let backend = cx.start().await;

    let (_, created) = backend
        .send(Method::POST, None, Some(json!({ "name": "Ada" })))
        .await;
    let id = backend.id_of(&created);

    backend.send(Method::DELETE, Some(&id), None).await;

    for id in [id.as_str(), "not-an-id"] {
        let (status, _) = backend.send(Method::GET, Some(id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id={id}");

        let (status, _) = backend
            .send(Method::PUT, Some(id), Some(json!({ "name": "x" })))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id={id}");

        let (status, _) = backend.send(Method::DELETE, Some(id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id={id}");
    }

    backend.shutdown().await;
}

pub async fn null_values_are_stored(cx: Context) {
    let backend = cx.start().await;

    let (status, created) = backend
        .send(Method::POST, None, Some(json!({ "name": "Ada", "age": null })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["age"], json!(null));

    backend.shutdown().await;
}
