//! HTTP 服务模块
//!
//! 员工与部门的 REST 接口

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use error::HttpError;
pub use router::create_router;
pub use server::HttpServer;
pub use state::AppState;
