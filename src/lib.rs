//! Tasklet - 内存待办事项 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Todo Context: 待办事项上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TodoRepository）
//! - Commands: CQRS 命令处理器（创建/更新/删除）
//! - Queries: CQRS 查询处理器（列表/已完成列表）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: TodoRepository 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
