//! Todo Context - Aggregate Root

use super::{TodoId, TodoName};

/// Todo 聚合根
///
/// 不变量:
/// - id 在创建后不可变更
/// - name 非空，且在整个存储内唯一（唯一性由存储层保证）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    name: TodoName,
    is_completed: bool,
}

impl Todo {
    /// 创建新的待办事项
    pub fn new(id: TodoId, name: TodoName, is_completed: bool) -> Self {
        Self {
            id,
            name,
            is_completed,
        }
    }

    /// 更新名称
    pub fn rename(&mut self, name: TodoName) {
        self.name = name;
    }

    /// 更新完成状态
    pub fn set_completed(&mut self, is_completed: bool) {
        self.is_completed = is_completed;
    }

    // Getters
    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn name(&self) -> &TodoName {
        &self.name
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let name = TodoName::new("Buy milk").unwrap();
        let todo = Todo::new(TodoId::new(1), name, false);

        assert_eq!(todo.id().as_i64(), 1);
        assert_eq!(todo.name().as_str(), "Buy milk");
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_todo_mutation() {
        let name = TodoName::new("Buy milk").unwrap();
        let mut todo = Todo::new(TodoId::new(1), name, false);

        todo.rename(TodoName::new("Buy bread").unwrap());
        todo.set_completed(true);

        assert_eq!(todo.id().as_i64(), 1);
        assert_eq!(todo.name().as_str(), "Buy bread");
        assert!(todo.is_completed());
    }
}
