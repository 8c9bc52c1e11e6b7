//! In-Memory Todo Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{RepositoryError, TodoRepositoryPort};
use crate::domain::{Todo, TodoId, TodoName};

/// 内存待办事项存储
///
/// 记录保存在进程内，随进程退出丢失
/// id 由原子计数器分配，从 1 开始
pub struct InMemoryTodoRepository {
    todos: DashMap<i64, Todo>,
    next_id: AtomicI64,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn sorted(&self, mut todos: Vec<Todo>) -> Vec<Todo> {
        todos.sort_by_key(|t| t.id().as_i64());
        todos
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepositoryPort for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self.todos.iter().map(|e| e.value().clone()).collect();
        Ok(self.sorted(todos))
    }

    async fn find_completed(&self) -> Result<Vec<Todo>, RepositoryError> {
        let todos = self
            .todos
            .iter()
            .filter(|e| e.value().is_completed())
            .map(|e| e.value().clone())
            .collect();
        Ok(self.sorted(todos))
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, RepositoryError> {
        Ok(self.todos.get(&id.as_i64()).map(|e| e.value().clone()))
    }

    async fn insert(&self, name: TodoName, is_completed: bool) -> Result<Todo, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let todo = Todo::new(TodoId::new(id), name, is_completed);
        self.todos.insert(id, todo.clone());
        tracing::debug!(todo_id = id, "Todo inserted");
        Ok(todo)
    }

    async fn update(
        &self,
        id: TodoId,
        name: TodoName,
        is_completed: bool,
    ) -> Result<Todo, RepositoryError> {
        let mut entry = self
            .todos
            .get_mut(&id.as_i64())
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        entry.rename(name);
        entry.set_completed(is_completed);
        tracing::debug!(todo_id = %id, "Todo updated in place");
        Ok(entry.value().clone())
    }

    async fn remove(&self, id: TodoId) -> Result<Todo, RepositoryError> {
        self.todos
            .remove(&id.as_i64())
            .map(|(_, todo)| {
                tracing::debug!(todo_id = %id, "Todo removed");
                todo
            })
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn exists_by_name(
        &self,
        name: &str,
        excluding: Option<TodoId>,
    ) -> Result<bool, RepositoryError> {
        let exists = self.todos.iter().any(|e| {
            e.value().name().as_str() == name
                && excluding.map_or(true, |id| e.value().id() != id)
        });
        Ok(exists)
    }
}
