//! Todo Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateTodo, DeleteTodo, UpdateTodo};
use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, TodoRepositoryPort};
use crate::domain::{Todo, TodoName};

// ============================================================================
// Response DTOs
// ============================================================================

/// 待办事项完整数据（含 id）
#[derive(Debug, Clone)]
pub struct TodoData {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
}

impl From<Todo> for TodoData {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().as_i64(),
            name: todo.name().as_str().to_string(),
            is_completed: todo.is_completed(),
        }
    }
}

// ============================================================================
// CreateTodo
// ============================================================================

/// CreateTodo Handler
pub struct CreateTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl CreateTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: CreateTodo) -> Result<TodoData, ApplicationError> {
        // 空名称按业务规则冲突处理
        let name = TodoName::new(command.name)
            .map_err(|_| ApplicationError::conflict("Todo name cannot be empty"))?;

        if self.todo_repo.exists_by_name(name.as_str(), None).await? {
            return Err(ApplicationError::conflict(format!(
                "'{}' is already in your tasks",
                name
            )));
        }

        let todo = self.todo_repo.insert(name, command.is_completed).await?;

        tracing::info!(
            todo_id = %todo.id(),
            name = %todo.name(),
            "Todo created"
        );

        Ok(TodoData::from(todo))
    }
}

// ============================================================================
// UpdateTodo
// ============================================================================

/// UpdateTodo Handler
pub struct UpdateTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl UpdateTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: UpdateTodo) -> Result<TodoData, ApplicationError> {
        // 先验证记录存在，再做名称校验
        self.todo_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Todo", command.id))?;

        let name = TodoName::new(command.name)
            .map_err(|_| ApplicationError::conflict("Todo name cannot be empty"))?;

        // 唯一性检查跳过记录自身，保留原名称的更新是合法的
        if self
            .todo_repo
            .exists_by_name(name.as_str(), Some(command.id))
            .await?
        {
            return Err(ApplicationError::conflict(format!(
                "'{}' is already in your tasks",
                name
            )));
        }

        let todo = self
            .todo_repo
            .update(command.id, name, command.is_completed)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Todo", command.id),
                other => other.into(),
            })?;

        tracing::info!(
            todo_id = %todo.id(),
            name = %todo.name(),
            is_completed = todo.is_completed(),
            "Todo updated"
        );

        Ok(TodoData::from(todo))
    }
}

// ============================================================================
// DeleteTodo
// ============================================================================

/// DeleteTodo Handler
pub struct DeleteTodoHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl DeleteTodoHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, command: DeleteTodo) -> Result<TodoData, ApplicationError> {
        // 未知 id 按已发布的 API 行为返回冲突而非未找到
        let todo = self.todo_repo.remove(command.id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => {
                ApplicationError::conflict(format!("Todo {} does not exist", command.id))
            }
            other => other.into(),
        })?;

        tracing::info!(
            todo_id = %todo.id(),
            name = %todo.name(),
            "Todo deleted"
        );

        Ok(TodoData::from(todo))
    }
}
