//! 事务层错误类型

use thiserror::Error;

use crate::storage::StorageError;

/// 事务层结果类型
pub type TransactionResult<T> = Result<T, TransactionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// The statement's match count was zero; the transaction was rolled back.
    #[error("statement matched nothing")]
    NoMatch,
}
