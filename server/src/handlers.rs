use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use todo_core::{CreateTodo, Todo, TodoId, UpdateTodo};
use tracing::{debug, info};

use crate::{error::ApiError, SharedStore};

/// `{"message": ...}` body used by the welcome route and by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Query string of `GET /todos`. A `first_n` of zero or below yields an
/// empty list.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub first_n: Option<i64>,
}

pub async fn index() -> Json<Message> {
    Json(Message::new("Hello, World!"))
}

pub async fn list_todos(
    State(store): State<SharedStore>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let Query(params) = params?;
    let limit = params.first_n.map(|n| usize::try_from(n).unwrap_or(0));
    let todos = store.read().await.list_todos(limit).to_vec();
    debug!(count = todos.len(), ?limit, "listed todos");
    Ok(Json(todos))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    todo_id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(todo_id) = todo_id?;
    let todo = store.read().await.get_todo(todo_id)?.clone();
    debug!(todo_id, "fetched todo");
    Ok(Json(todo))
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = input?;
    let todo = store.write().await.create_todo(input)?;
    info!(todo_id = todo.todo_id, priority = %todo.priority, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    todo_id: Result<Path<TodoId>, PathRejection>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(todo_id) = todo_id?;
    let Json(input) = input?;
    if input.is_empty() {
        let todo = store.read().await.get_todo(todo_id)?.clone();
        debug!(todo_id, "update with no fields");
        return Ok(Json(todo));
    }
    let todo = store.write().await.update_todo(todo_id, input)?;
    info!(todo_id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    todo_id: Result<Path<TodoId>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(todo_id) = todo_id?;
    let message = store.write().await.delete_todo(todo_id)?;
    info!(todo_id, "deleted todo");
    Ok(Json(Message::new(message)))
}
