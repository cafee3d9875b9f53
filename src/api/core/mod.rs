//! API 核心层 - 与传输层无关的业务逻辑
//!
//! 提供员工、部门和 Schema 操作，被 HTTP 层和命令行复用。

pub mod department_api;
pub mod employee_api;
pub mod error;
pub mod schema_api;

pub use department_api::DepartmentApi;
pub use employee_api::EmployeeApi;
pub use error::{CoreError, CoreResult};
pub use schema_api::SchemaApi;
