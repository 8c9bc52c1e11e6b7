//! Todo Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TodoRepositoryPort;
use crate::application::queries::{ListCompletedTodos, ListTodos};
use crate::domain::Todo;

// ============================================================================
// Response DTOs
// ============================================================================

/// 待办事项读取视图（列表投影，不含 id）
#[derive(Debug, Clone)]
pub struct TodoView {
    pub name: String,
    pub is_completed: bool,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            name: todo.name().as_str().to_string(),
            is_completed: todo.is_completed(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListTodos Handler
pub struct ListTodosHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl ListTodosHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(&self, _query: ListTodos) -> Result<Vec<TodoView>, ApplicationError> {
        let todos = self.todo_repo.find_all().await?;
        Ok(todos.into_iter().map(TodoView::from).collect())
    }
}

/// ListCompletedTodos Handler
pub struct ListCompletedTodosHandler {
    todo_repo: Arc<dyn TodoRepositoryPort>,
}

impl ListCompletedTodosHandler {
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self { todo_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCompletedTodos,
    ) -> Result<Vec<TodoView>, ApplicationError> {
        let todos = self.todo_repo.find_completed().await?;
        Ok(todos.into_iter().map(TodoView::from).collect())
    }
}
