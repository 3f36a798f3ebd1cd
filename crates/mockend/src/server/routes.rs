use crate::Db;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

#[derive(Debug, Serialize)]
struct Message {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct Failure {
    error: String,
}

type Body = Result<Json<Value>, JsonRejection>;

pub(super) async fn create(State(db): State<Db>, body: Body) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match db.create(&body).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => failure(StatusCode::BAD_REQUEST, err),
    }
}

pub(super) async fn find_all(State(db): State<Db>) -> Response {
    match db.find_all().await {
        Ok(records) => Json(records).into_response(),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}

pub(super) async fn find_by_id(State(db): State<Db>, Path(id): Path<String>) -> Response {
    match db.find_by_id(&id).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => not_found(),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}

pub(super) async fn update_by_id(
    State(db): State<Db>,
    Path(id): Path<String>,
    body: Body,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match db.update_by_id(&id, &body).await {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => not_found(),
        Err(err) => failure(StatusCode::BAD_REQUEST, err),
    }
}

pub(super) async fn delete_by_id(State(db): State<Db>, Path(id): Path<String>) -> Response {
    match db.delete_by_id(&id).await {
        Ok(true) => Json(Message {
            message: "Item deleted",
        })
        .into_response(),
        Ok(false) => not_found(),
        Err(err) => failure(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(Message {
            message: "Item not found",
        }),
    )
        .into_response()
}

fn failure(status: StatusCode, err: impl Display) -> Response {
    let message = err.to_string();

    if status.is_server_error() {
        tracing::error!(%status, error = %message, "request failed");
    } else {
        tracing::warn!(%status, error = %message, "request rejected");
    }

    (status, Json(Failure { error: message })).into_response()
}
