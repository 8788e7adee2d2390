//! # 用户资源 CRUD 服务
//!
//! 基于 Axum + SQLx 的最小化用户管理服务，分层结构：
//! - `app`: 用户资源的数据访问适配器、处理器与路由表
//! - `core`: 错误处理、响应结构、中间件
//! - `infrastructure`: 数据库连接池与日志初始化
//! - `config`: 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::routes::{build_router, AppState};
pub use app::user::store::{PgUserStore, StoreError, UserStore};
