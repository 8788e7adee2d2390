//! 核心错误处理模块

use axum::{
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error};

use crate::app::user::store::StoreError;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed,
    RequestTimeout,
    InternalServerError(String),
}

/// 错误响应结构 `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg)
            | CoreError::NotFound(msg)
            | CoreError::InternalServerError(msg) => msg.as_str(),
            CoreError::MethodNotAllowed => "Method not allowed",
            CoreError::RequestTimeout => "Request timed out",
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CoreError::NotFound("User not found".to_string()),
            StoreError::Database(e) => {
                error!("Database error: {}", e);
                CoreError::InternalServerError("Database error".to_string())
            }
            StoreError::IdSpaceExhausted => {
                error!("User id sequence exhausted");
                CoreError::InternalServerError("Database error".to_string())
            }
        }
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Rejected path parameter: {}", rejection.body_text());
        CoreError::BadRequest("Invalid user ID".to_string())
    }
}

impl From<BytesRejection> for CoreError {
    fn from(rejection: BytesRejection) -> Self {
        debug!("Failed to read request body: {}", rejection.body_text());
        CoreError::BadRequest("Invalid request payload".to_string())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Rejected query string: {}", rejection.body_text());
        CoreError::BadRequest("Invalid query parameters".to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();
        messages.sort();

        CoreError::BadRequest(messages.join(", "))
    }
}
