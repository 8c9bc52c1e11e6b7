//! Todo Commands

use crate::domain::TodoId;

/// 创建待办事项
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub name: String,
    pub is_completed: bool,
}

/// 更新待办事项（name 与 is_completed 原地更新，id 不变）
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub id: TodoId,
    pub name: String,
    pub is_completed: bool,
}

/// 删除待办事项
#[derive(Debug, Clone)]
pub struct DeleteTodo {
    pub id: TodoId,
}
