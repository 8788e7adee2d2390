//! 用户处理器
//!
//! 每个处理器依次：解析路径参数、解析请求体、调用存储适配器、映射结果。
//! 提取失败通过 `Result<_, Rejection>` 接住，统一转换为 400 JSON 响应。
//! 请求体按 JSON 解析，不要求 `Content-Type` 头。

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use tracing::debug;
use tracing::info;
use validator::Validate;

use super::model::{ListQuery, User, UserPayload};
use crate::app::routes::{AppState, Operation};
use crate::core::{error::CoreError, response::ResultResponse};

fn decode_payload(body: &[u8]) -> Result<UserPayload, CoreError> {
    let payload: UserPayload = serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        CoreError::BadRequest("Invalid request payload".to_string())
    })?;
    payload.validate()?;
    Ok(payload)
}

/// `GET /users`
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, CoreError> {
    let Query(query) = query?;
    let users = state.store.list(query.offset(), query.limit()).await?;
    Ok(Json(users))
}

/// `GET /user/:id`
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) = id?;
    let user = state.store.fetch(id).await?;
    Ok(Json(user))
}

/// `POST /user`
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let payload = decode_payload(&body?)?;

    let id = state.store.create(&payload.name, payload.age).await?;
    info!("Created user: {} ({})", payload.name, id);

    Ok((Operation::Create.success_status(), Json(payload.into_user(id))))
}

/// `PUT /users/:id`
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) = id?;
    let payload = decode_payload(&body?)?;

    state.store.update(id, &payload.name, payload.age).await?;
    info!("Updated user: {} ({})", payload.name, id);

    Ok(Json(payload.into_user(id)))
}

/// `DELETE /user/:id`
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ResultResponse>, CoreError> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    info!("Deleted user: {}", id);

    Ok(Json(ResultResponse::success()))
}

/// 未匹配任何路由
pub async fn route_not_found() -> CoreError {
    CoreError::NotFound("Route not found".to_string())
}

/// 路径存在但方法不匹配
pub async fn method_not_allowed() -> CoreError {
    CoreError::MethodNotAllowed
}
