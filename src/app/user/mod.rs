//! 用户资源

pub mod handler;
pub mod memory;
pub mod model;
pub mod store;

pub use memory::MemoryUserStore;
pub use model::{ListQuery, User, UserPayload};
pub use store::{PgUserStore, StoreError, UserStore};
