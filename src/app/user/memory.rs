//! 内存用户存储，语义与 `PgUserStore` 一致，用于测试与本地调试

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use super::{
    model::User,
    store::{StoreError, UserStore},
};

#[derive(Debug, Default)]
struct Table {
    // 模拟 SERIAL，从 1 开始
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        // 持锁期间不会 panic，中毒时直接沿用内部数据
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn fetch(&self, id: i32) -> Result<User, StoreError> {
        self.lock().rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, age: i32) -> Result<i32, StoreError> {
        let mut table = self.lock();
        let id = table
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)?;
        table.next_id = id;
        table.rows.insert(
            id,
            User {
                id,
                name: name.to_string(),
                age,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i32, name: &str, age: i32) -> Result<(), StoreError> {
        let mut table = self.lock();
        let user = table.rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        user.name = name.to_string();
        user.age = age;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .lock()
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}
