//! 核心响应处理模块

use serde::Serialize;

/// 操作确认响应 `{"result": "success"}`
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
