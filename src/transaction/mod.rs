//! 事务执行模块
//!
//! - `error`：事务层错误（存储错误或未命中）
//! - `executor`：单语句的读 / 写事务作用域
//! - `shaping`：将原始记录整形为响应记录（含员工按姓名聚合）

pub mod error;
pub mod executor;
pub mod shaping;

pub use error::{TransactionError, TransactionResult};
pub use executor::TransactionExecutor;
pub use shaping::{group_employees, shape_departments, shape_employees};
