//! 存储层错误类型
//!
//! 涵盖图数据库连接、语句执行和结果解码相关的错误

use thiserror::Error;

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;

/// 存储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("query failed: {0}")]
    QueryError(String),
    #[error("transaction error: {0}")]
    TransactionError(String),
    #[error("cannot decode column '{column}': {reason}")]
    DecodeError { column: String, reason: String },
}

impl StorageError {
    /// The store could not be reached at all, as opposed to rejecting a statement.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::ConnectionError(_))
    }

    pub fn decode(column: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::DecodeError {
            column: column.into(),
            reason: reason.into(),
        }
    }
}

impl From<neo4rs::Error> for StorageError {
    fn from(e: neo4rs::Error) -> Self {
        match e {
            neo4rs::Error::IOError { .. } | neo4rs::Error::ConnectionError => {
                StorageError::ConnectionError(e.to_string())
            }
            other => StorageError::QueryError(other.to_string()),
        }
    }
}
