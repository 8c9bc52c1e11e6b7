//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateTodoHandler, DeleteTodoHandler, UpdateTodoHandler,
    // Query handlers
    ListCompletedTodosHandler, ListTodosHandler,
    // Ports
    TodoRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub todo_repo: Arc<dyn TodoRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_todo_handler: CreateTodoHandler,
    pub update_todo_handler: UpdateTodoHandler,
    pub delete_todo_handler: DeleteTodoHandler,

    // ========== Query Handlers ==========
    pub list_todos_handler: ListTodosHandler,
    pub list_completed_todos_handler: ListCompletedTodosHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(todo_repo: Arc<dyn TodoRepositoryPort>) -> Self {
        Self {
            // Ports
            todo_repo: todo_repo.clone(),

            // Command handlers
            create_todo_handler: CreateTodoHandler::new(todo_repo.clone()),
            update_todo_handler: UpdateTodoHandler::new(todo_repo.clone()),
            delete_todo_handler: DeleteTodoHandler::new(todo_repo.clone()),

            // Query handlers
            list_todos_handler: ListTodosHandler::new(todo_repo.clone()),
            list_completed_todos_handler: ListCompletedTodosHandler::new(todo_repo),
        }
    }
}
