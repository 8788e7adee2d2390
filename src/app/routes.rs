//! 路由表
//!
//! 方法/路径到操作的映射以数据形式声明在 `ROUTES` 中，`build_router` 按路径分组后生成
//! Axum 路由。新增操作只需在表中追加一行并在 `attach` 中绑定处理器。

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    http::StatusCode,
    routing::{MethodFilter, MethodRouter},
    Router,
};

use super::user::{handler, store::UserStore};

/// 应用状态，由启动流程注入存储实现
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// 成功时的状态码
    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::Create => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub verb: Verb,
    pub path: &'static str,
    pub operation: Operation,
}

pub static ROUTES: [Route; 5] = [
    Route {
        verb: Verb::Get,
        path: "/users",
        operation: Operation::List,
    },
    Route {
        verb: Verb::Get,
        path: "/user/:id",
        operation: Operation::Fetch,
    },
    Route {
        verb: Verb::Post,
        path: "/user",
        operation: Operation::Create,
    },
    Route {
        verb: Verb::Put,
        path: "/users/:id",
        operation: Operation::Update,
    },
    Route {
        verb: Verb::Delete,
        path: "/user/:id",
        operation: Operation::Delete,
    },
];

fn attach(router: MethodRouter<AppState>, route: &Route) -> MethodRouter<AppState> {
    let filter = route.verb.filter();
    match route.operation {
        Operation::List => router.on(filter, handler::list_users),
        Operation::Fetch => router.on(filter, handler::get_user),
        Operation::Create => router.on(filter, handler::create_user),
        Operation::Update => router.on(filter, handler::update_user),
        Operation::Delete => router.on(filter, handler::delete_user),
    }
}

/// 根据 `ROUTES` 构建路由
pub fn build_router(state: AppState) -> Router {
    let mut by_path: BTreeMap<&'static str, MethodRouter<AppState>> = BTreeMap::new();
    for route in ROUTES.iter() {
        let router = by_path.remove(route.path).unwrap_or_else(MethodRouter::new);
        by_path.insert(route.path, attach(router, route));
    }

    by_path
        .into_iter()
        .fold(Router::new(), |app, (path, router)| {
            app.route(path, router.fallback(handler::method_not_allowed))
        })
        .fallback(handler::route_not_found)
        .with_state(state)
}
