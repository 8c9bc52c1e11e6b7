//! 查询定义（CQRS 读侧）

pub mod handlers;

mod todo_queries;

pub use todo_queries::{ListCompletedTodos, ListTodos};
