//! Todo HTTP Handlers
//!
//! Thin mapping from REST verbs to `TodoService`. Each handler resolves
//! the caller via `CurrentUser` and stamps that identity onto any incoming
//! body, so the client's `userId` is never trusted.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::service::TodoService;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::shared::Item;

/// `GET /todos`
pub async fn list_todos(
    State(service): State<TodoService>,
    user: CurrentUser,
) -> Result<Json<Vec<Item>>, BackendError> {
    let items = service.list(user.as_str()).await?;
    Ok(Json(items))
}

/// `GET /todos/{id}`
pub async fn get_todo(
    State(service): State<TodoService>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Item>, BackendError> {
    service
        .get_by_id(&id, user.as_str())
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(id))
}

/// `POST /todos`
///
/// Responds 201 with the stored item and a `Location` header.
pub async fn create_todo(
    State(service): State<TodoService>,
    user: CurrentUser,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<Response, BackendError> {
    let Json(mut item) = body?;
    item.user_id = Some(user.0);

    let created = service.create(item).await?;
    let location = format!("/todos/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// `PUT /todos/{id}`
///
/// Full replace; the body id must equal the path id.
pub async fn update_todo(
    State(service): State<TodoService>,
    user: CurrentUser,
    Path(id): Path<String>,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(mut item) = body?;
    item.user_id = Some(user.0);

    service.update(&id, item).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(
    State(service): State<TodoService>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode, BackendError> {
    service.delete(&id, user.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
