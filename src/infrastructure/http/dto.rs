//! Data Transfer Objects
//!
//! 对外线格式使用 camelCase 字段名（isCompleted）

use serde::{Deserialize, Serialize};

use crate::application::{TodoData, TodoView};

// ============================================================================
// Request DTOs
// ============================================================================

/// 创建待办事项请求体
///
/// 缺失字段走 serde 默认值: name 为空字符串时在应用层按冲突处理
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// 更新待办事项请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// 实体完整表示（创建成功时返回，含 id）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemResponse {
    pub id: i64,
    pub name: String,
    pub is_completed: bool,
}

impl From<TodoData> for TodoItemResponse {
    fn from(data: TodoData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            is_completed: data.is_completed,
        }
    }
}

/// 读取投影（列表/更新/删除返回，不含 id）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadTodoResponse {
    pub name: String,
    pub is_completed: bool,
}

impl From<TodoData> for ReadTodoResponse {
    fn from(data: TodoData) -> Self {
        Self {
            name: data.name,
            is_completed: data.is_completed,
        }
    }
}

impl From<TodoView> for ReadTodoResponse {
    fn from(view: TodoView) -> Self {
        Self {
            name: view.name,
            is_completed: view.is_completed,
        }
    }
}
