use crate::api::server::http::HttpServer;
use crate::storage::StorageClient;
use std::sync::Arc;

pub struct AppState<S: StorageClient + 'static> {
    pub server: Arc<HttpServer<S>>,
}

impl<S: StorageClient + 'static> AppState<S> {
    pub fn new(server: Arc<HttpServer<S>>) -> Self {
        Self { server }
    }
}

impl<S: StorageClient + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            server: self.server.clone(),
        }
    }
}
