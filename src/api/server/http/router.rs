use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::storage::StorageClient;

use super::{
    handlers::{departments, employees, health},
    middleware::{error, logging},
    state::AppState,
};

/// 不设请求超时：处理器一旦开始就会跑到事务结束，超时交给存储驱动
pub fn create_router<S: StorageClient + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::check::<S>))
        .route(
            "/employees",
            get(employees::list::<S>).post(employees::create::<S>),
        )
        .route(
            "/employees/{id}",
            put(employees::update::<S>).delete(employees::delete::<S>),
        )
        .route(
            "/departments",
            get(departments::list::<S>).post(departments::create::<S>),
        )
        .layer(middleware::from_fn(logging::logging_middleware))
        .layer(middleware::from_fn(error::error_handling_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
