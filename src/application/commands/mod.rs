//! 命令定义（CQRS 写侧）

pub mod handlers;

mod todo_commands;

pub use todo_commands::{CreateTodo, DeleteTodo, UpdateTodo};
