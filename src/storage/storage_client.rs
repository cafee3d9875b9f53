use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt;

use crate::query::{Statement, Value};
use crate::storage::error::{StorageError, StorageResult};

/// 事务访问模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => write!(f, "read"),
            AccessMode::Write => write!(f, "write"),
        }
    }
}

/// 一条结果记录：列名 → 值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn text(&self, column: &str) -> StorageResult<String> {
        match self.values.get(column) {
            Some(Value::Text(s)) => Ok(s.clone()),
            Some(other) => Err(StorageError::decode(column, format!("expected text, got {}", other))),
            None => Err(StorageError::decode(column, "missing")),
        }
    }

    pub fn integer(&self, column: &str) -> StorageResult<i64> {
        match self.values.get(column) {
            Some(Value::Integer(n)) => Ok(*n),
            Some(other) => Err(StorageError::decode(column, format!("expected integer, got {}", other))),
            None => Err(StorageError::decode(column, "missing")),
        }
    }
}

/// 图存储客户端
///
/// 进程启动时构造一次，注入到各请求处理器；每个请求通过 `begin` 获取一个事务。
#[async_trait]
pub trait StorageClient: Send + Sync + fmt::Debug {
    /// 打开一个事务
    ///
    /// `mode` 只是调用方的意图：实现可以据此路由，但不保证服务端拒绝写入。
    /// 读作用域不落盘依赖执行器在取完结果后回滚。
    async fn begin(&self, mode: AccessMode) -> StorageResult<Box<dyn StorageTransaction>>;

    /// Connectivity check used by the health endpoint.
    async fn verify(&self) -> StorageResult<()>;
}

/// 作用域事务，必须以 `commit` 或 `rollback` 结束
#[async_trait]
pub trait StorageTransaction: Send {
    async fn run(&mut self, statement: &Statement) -> StorageResult<Vec<Record>>;
    async fn commit(self: Box<Self>) -> StorageResult<()>;
    async fn rollback(self: Box<Self>) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = Record::new().with("name", "Sales").with("count", 3i64);
        assert_eq!(record.text("name"), Ok("Sales".to_string()));
        assert_eq!(record.integer("count"), Ok(3));
        assert!(matches!(record.integer("name"), Err(StorageError::DecodeError { .. })));
        assert!(matches!(record.text("missing"), Err(StorageError::DecodeError { .. })));
    }
}
