//! 集成测试共享工具模块
//!
//! 在 `MockStorage` 之上构建完整的路由，并提供发送请求、读取 JSON 响应的辅助函数

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tower::ServiceExt;

use staffgraph::api::server::http::{create_router, AppState, HttpServer};
use staffgraph::storage::{MockStorage, Record, StorageClient};

/// 测试应用：路由和可检查的 mock 存储
pub struct TestApp {
    pub storage: MockStorage,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let storage = MockStorage::new();
        Self::wrapping(storage.clone(), storage)
    }

    /// Serves through `client` while `storage` stays available for inspection;
    /// used when `client` decorates the mock.
    pub fn wrapping<S: StorageClient + 'static>(storage: MockStorage, client: S) -> Self {
        let server = Arc::new(HttpServer::new(Arc::new(client)));
        let router = create_router(AppState::new(server));
        Self { storage, router }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> (StatusCode, JsonValue) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> (StatusCode, JsonValue) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, JsonValue) {
        self.send(Method::DELETE, uri, None).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, JsonValue) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header("content-type", "application/json");
                Body::from(text.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, json)
    }
}

pub fn employee_row(first: &str, last: &str, department: &str) -> Record {
    Record::new()
        .with("firstName", first)
        .with("lastName", last)
        .with("department", department)
}

pub fn department_row(name: &str, employee_count: i64) -> Record {
    Record::new()
        .with("department", name)
        .with("employeeCount", employee_count)
}
