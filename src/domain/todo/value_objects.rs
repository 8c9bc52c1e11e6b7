//! Todo Context - Value Objects

use super::TodoError;

/// 待办事项唯一标识
///
/// 由存储层在插入时分配，从 1 开始递增，之后不可变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 待办事项名称
///
/// 不变量: 不能为空字符串（区分大小写的唯一性由存储层检查）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoName(String);

impl TodoName {
    pub fn new(name: impl Into<String>) -> Result<Self, TodoError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TodoError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
