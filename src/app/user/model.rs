//! 用户数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 列表查询默认条数
pub const DEFAULT_COUNT: i64 = 10;
/// 列表查询单次最大条数
pub const MAX_COUNT: i64 = 100;

/// 用户记录，`id` 由数据库分配
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// 创建/更新用户的请求体
///
/// 请求体中的 `id` 字段会被忽略，创建时由数据库分配，更新时取自路径。
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserPayload {
    // users.name 为 VARCHAR(40)
    #[validate(length(max = 40, message = "Name must be at most 40 characters"))]
    pub name: String,

    pub age: i32,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// 列表查询参数 `?start=N&count=M`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub start: Option<i64>,
    pub count: Option<i64>,
}

impl ListQuery {
    /// 起始偏移，负数按 0 处理
    pub fn offset(&self) -> i64 {
        self.start.unwrap_or(0).max(0)
    }

    /// 返回条数，限制在 `1..=MAX_COUNT`
    pub fn limit(&self) -> i64 {
        self.count.unwrap_or(DEFAULT_COUNT).clamp(1, MAX_COUNT)
    }
}
