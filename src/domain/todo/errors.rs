//! Todo Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("待办名称不能为空")]
    EmptyName,
}
