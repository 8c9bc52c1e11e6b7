//! Query Handlers

mod todo_handlers;

pub use todo_handlers::{ListCompletedTodosHandler, ListTodosHandler, TodoView};
