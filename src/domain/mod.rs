//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Todo Context: 待办事项管理

pub mod todo;

pub use todo::{Todo, TodoError, TodoId, TodoName};
