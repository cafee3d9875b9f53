//! API 核心层错误类型
//!
//! 与传输层无关的业务逻辑错误

use thiserror::Error;

use crate::query::QueryError;
use crate::storage::StorageError;
use crate::transaction::TransactionError;

/// 核心层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    NotImplemented(String),
}

impl CoreError {
    /// Machine-readable kind reported next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "validation_error",
            CoreError::NotFound(_) => "not_found",
            CoreError::Storage(_) => "store_error",
            CoreError::NotImplemented(_) => "not_implemented",
        }
    }
}

/// 核心层结果类型
pub type CoreResult<T> = Result<T, CoreError>;

impl From<QueryError> for CoreError {
    fn from(err: QueryError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// `NoMatch` becomes a generic `NotFound`; callers that know the target map it first.
impl From<TransactionError> for CoreError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::Storage(e) => CoreError::Storage(e),
            TransactionError::NoMatch => {
                CoreError::NotFound(TransactionError::NoMatch.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_errors_become_validation() {
        let err: CoreError = QueryError::NotAnInteger {
            field: "employeeCount".into(),
            value: "abc".into(),
        }
        .into();
        assert_eq!(err.kind(), "validation_error");
        assert_eq!(err.to_string(), "employeeCount: 'abc' is not a non-negative integer");
    }

    #[test]
    fn test_storage_errors_pass_through() {
        let err: CoreError = StorageError::QueryError("syntax".into()).into();
        assert_eq!(err, CoreError::Storage(StorageError::QueryError("syntax".into())));
        assert_eq!(err.kind(), "store_error");
    }

    #[test]
    fn test_transaction_errors_keep_their_kind() {
        let err: CoreError = TransactionError::Storage(StorageError::ConnectionError("refused".into())).into();
        assert!(matches!(err, CoreError::Storage(ref e) if e.is_unavailable()));

        let err: CoreError = TransactionError::NoMatch.into();
        assert_eq!(err.kind(), "not_found");
    }
}
