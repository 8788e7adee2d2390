//! 应用层

pub mod routes;
pub mod user;
