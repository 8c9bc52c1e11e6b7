//! Todo HTTP Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateTodo, DeleteTodo, ListCompletedTodos, ListTodos, UpdateTodo};
use crate::domain::TodoId;
use crate::infrastructure::http::dto::{
    CreateTodoRequest, ReadTodoResponse, TodoItemResponse, UpdateTodoRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取所有待办事项
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReadTodoResponse>>, ApiError> {
    let result = state.list_todos_handler.handle(ListTodos).await?;

    Ok(Json(result.into_iter().map(ReadTodoResponse::from).collect()))
}

/// 获取已完成的待办事项
pub async fn list_completed_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReadTodoResponse>>, ApiError> {
    let result = state
        .list_completed_todos_handler
        .handle(ListCompletedTodos)
        .await?;

    Ok(Json(result.into_iter().map(ReadTodoResponse::from).collect()))
}

/// 创建待办事项
///
/// 请求体缺失或不可解析时返回 400，之后的校验（空名称、重名）返回 409
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateTodoRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) =
        body.ok_or_else(|| ApiError::BadRequest("Request body is required".to_string()))?;

    let command = CreateTodo {
        name: req.name,
        is_completed: req.is_completed,
    };

    let data = state.create_todo_handler.handle(command).await?;
    let location = format!("/api/v1/todoItems/{}", data.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TodoItemResponse::from(data)),
    ))
}

/// 更新待办事项
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Option<Json<UpdateTodoRequest>>,
) -> Result<Json<ReadTodoResponse>, ApiError> {
    let Json(req) =
        body.ok_or_else(|| ApiError::BadRequest("Request body is required".to_string()))?;

    let command = UpdateTodo {
        id: TodoId::new(id),
        name: req.name,
        is_completed: req.is_completed,
    };

    let data = state.update_todo_handler.handle(command).await?;

    Ok(Json(ReadTodoResponse::from(data)))
}

/// 删除待办事项，返回被删除记录的读取投影
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ReadTodoResponse>, ApiError> {
    let command = DeleteTodo {
        id: TodoId::new(id),
    };

    let data = state.delete_todo_handler.handle(command).await?;

    Ok(Json(ReadTodoResponse::from(data)))
}
