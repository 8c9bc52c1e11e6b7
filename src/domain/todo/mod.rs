//! Todo Context - 待办事项限界上下文
//!
//! 职责:
//! - Todo 聚合管理
//! - 名称与标识值对象
//! - 名称非空校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Todo;
pub use errors::TodoError;
pub use value_objects::{TodoId, TodoName};
