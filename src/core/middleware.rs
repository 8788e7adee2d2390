//! 核心中间件模块
//!
//! 由外到内：分配 request id、请求追踪 span、回写 request id、请求超时。

use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::Request,
    http::HeaderValue,
    BoxError, Router,
};
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{error, info_span, Level, Span};
use uuid::Uuid;

use super::error::CoreError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 为每个请求生成 uuid v4 request id，已携带的 `x-request-id` 保持不变
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}

fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

async fn handle_middleware_error(err: BoxError) -> CoreError {
    if err.is::<Elapsed>() {
        CoreError::RequestTimeout
    } else {
        error!("Unhandled middleware error: {}", err);
        CoreError::InternalServerError("Internal server error".to_string())
    }
}

/// 为路由挂载 request id、追踪与超时中间件
pub fn apply_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
