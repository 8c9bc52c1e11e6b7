//! Command Handlers

mod todo_handlers;

pub use todo_handlers::{CreateTodoHandler, DeleteTodoHandler, TodoData, UpdateTodoHandler};
