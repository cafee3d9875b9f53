//! 查询构建层错误类型
//!
//! 只覆盖在访问存储之前就能发现的输入问题

use thiserror::Error;

/// 查询构建结果类型
pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("{field}: '{value}' is not a non-negative integer")]
    NotAnInteger { field: String, value: String },
}
