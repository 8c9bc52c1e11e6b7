//! Repository Ports - 出站端口
//!
//! 定义待办事项存储的抽象接口
//! 具体实现在 infrastructure 层（内存存储）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Todo, TodoId, TodoName};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// Todo Repository Port
///
/// 每个操作相对其他存储操作原子执行
#[async_trait]
pub trait TodoRepositoryPort: Send + Sync {
    /// 获取所有待办事项（按 id 升序，即插入顺序）
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// 获取所有已完成的待办事项（按 id 升序）
    async fn find_completed(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// 根据 ID 查找待办事项
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError>;

    /// 插入新待办事项，由存储分配 ID 并返回完整记录
    async fn insert(&self, name: TodoName, is_completed: bool) -> Result<Todo, RepositoryError>;

    /// 原地更新已有记录（name 与 is_completed，id 不变）
    async fn update(
        &self,
        id: TodoId,
        name: TodoName,
        is_completed: bool,
    ) -> Result<Todo, RepositoryError>;

    /// 删除并返回被删除的记录
    async fn remove(&self, id: TodoId) -> Result<Todo, RepositoryError>;

    /// 名称唯一性探测（区分大小写的精确匹配）
    ///
    /// `excluding` 用于更新时跳过记录自身
    async fn exists_by_name(
        &self,
        name: &str,
        excluding: Option<TodoId>,
    ) -> Result<bool, RepositoryError>;
}
