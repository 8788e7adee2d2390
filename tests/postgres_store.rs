//! `PgUserStore` 集成测试
//!
//! 需要可用的 PostgreSQL，通过 `TEST_DATABASE_URL` 指定；未设置时测试直接跳过。
//! 各测试共享同一张表，因此串行执行。

use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::Mutex;

use axum_user_service::{
    infrastructure::database::{clear_users, ensure_schema},
    PgUserStore, StoreError, UserStore,
};

static TABLE_LOCK: Mutex<()> = Mutex::const_new(());

async fn connect() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    ensure_schema(&pool).await.expect("Failed to create tables");
    clear_users(&pool).await.expect("Failed to clear users");
    Some(pool)
}

#[tokio::test]
async fn test_read_after_write() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    let id = store.create("test user", 30).await.unwrap();
    assert_eq!(id, 1);

    let user = store.fetch(id).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.name, "test user");
    assert_eq!(user.age, 30);
}

#[tokio::test]
async fn test_fetch_never_existing() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    assert!(matches!(store.fetch(45).await, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_update() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    let id = store.create("User 1", 10).await.unwrap();
    let other = store.create("User 2", 20).await.unwrap();

    store.update(id, "updated", 21).await.unwrap();

    let user = store.fetch(id).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.name, "updated");
    assert_eq!(user.age, 21);

    let untouched = store.fetch(other).await.unwrap();
    assert_eq!(untouched.name, "User 2");

    assert!(matches!(
        store.update(999, "ghost", 1).await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_twice() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    let id = store.create("User 1", 10).await.unwrap();
    store.delete(id).await.unwrap();

    assert!(matches!(store.fetch(id).await, Err(StoreError::NotFound)));
    assert!(matches!(store.delete(id).await, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_list() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    assert!(store.list(0, 10).await.unwrap().is_empty());

    for i in 1..=5 {
        store.create(&format!("User {}", i), i * 10).await.unwrap();
    }

    let users = store.list(1, 2).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["User 2", "User 3"]);

    assert_eq!(store.list(0, 10).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_values_are_bound_not_interpolated() {
    let _guard = TABLE_LOCK.lock().await;
    let Some(pool) = connect().await else { return };
    let store = PgUserStore::new(pool);

    let name = "x'); DROP TABLE users; --";
    let id = store.create(name, 1).await.unwrap();

    let user = store.fetch(id).await.unwrap();
    assert_eq!(user.name, name);
    assert_eq!(store.list(0, 10).await.unwrap().len(), 1);
}
