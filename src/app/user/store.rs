//! 用户数据访问适配器
//!
//! `UserStore` 负责 `User` 与 `users` 表之间的转换，所有值均通过参数绑定传入 SQL。
//! 适配器只返回类型化结果，HTTP 状态码的映射由处理器负责。

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;

use super::model::User;

/// 数据访问错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("user id sequence exhausted")]
    IdSpaceExhausted,
}

/// 用户存储接口
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 按 id 读取用户，不存在时返回 `StoreError::NotFound`
    async fn fetch(&self, id: i32) -> Result<User, StoreError>;

    /// 插入新用户，返回数据库分配的 id
    async fn create(&self, name: &str, age: i32) -> Result<i32, StoreError>;

    /// 覆盖 `name`/`age`，`id` 不变；没有匹配行时返回 `StoreError::NotFound`
    async fn update(&self, id: i32, name: &str, age: i32) -> Result<(), StoreError>;

    /// 删除用户，没有匹配行时返回 `StoreError::NotFound`
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// 读取从 `offset` 开始的至多 `limit` 个用户，按 id 升序
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError>;
}

/// 基于 PostgreSQL 连接池的实现
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn fetch(&self, id: i32) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>("SELECT id, name, age FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, age: i32) -> Result<i32, StoreError> {
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO users (name, age) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(age)
                .fetch_one(&self.pool)
                .await?;

        debug!("Inserted user {}", id);
        Ok(id)
    }

    async fn update(&self, id: i32, name: &str, age: i32) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE users SET name = $1, age = $2 WHERE id = $3")
            .bind(name)
            .bind(age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, age FROM users ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
