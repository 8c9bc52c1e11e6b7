//! Todo Queries

/// 列出所有待办事项
#[derive(Debug, Clone, Copy)]
pub struct ListTodos;

/// 列出已完成的待办事项
#[derive(Debug, Clone, Copy)]
pub struct ListCompletedTodos;
