//! 事务执行器
//!
//! 每次调用只打开一个事务，并保证在所有出口上显式结束：
//! 读事务取完结果后回滚，写事务成功时提交，任何失败都先回滚再返回原始错误。

use log::{debug, warn};
use std::sync::Arc;

use crate::query::Statement;
use crate::storage::{AccessMode, Record, StorageClient, StorageResult, StorageTransaction};
use crate::transaction::error::{TransactionError, TransactionResult};

pub struct TransactionExecutor<S: StorageClient + 'static> {
    storage: Arc<S>,
}

impl<S: StorageClient + 'static> Clone for TransactionExecutor<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

/// Best-effort rollback on an error path; the caller still sees the first error.
async fn abandon(txn: Box<dyn StorageTransaction>) {
    if let Err(e) = txn.rollback().await {
        warn!("Rollback after failure did not complete: {}", e);
    }
}

impl<S: StorageClient + 'static> TransactionExecutor<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    async fn execute(&self, mode: AccessMode, statement: &Statement) -> StorageResult<Vec<Record>> {
        debug!("{} transaction: {}", mode, statement.text);
        let mut txn = self.storage.begin(mode).await?;
        let result = txn.run(statement).await;
        match result {
            Ok(records) => {
                match mode {
                    AccessMode::Read => txn.rollback().await?,
                    AccessMode::Write => txn.commit().await?,
                }
                Ok(records)
            }
            Err(e) => {
                abandon(txn).await;
                Err(e)
            }
        }
    }

    /// 在只读事务中执行
    pub async fn read(&self, statement: &Statement) -> TransactionResult<Vec<Record>> {
        Ok(self.execute(AccessMode::Read, statement).await?)
    }

    /// 在写事务中执行，成功后提交
    pub async fn write(&self, statement: &Statement) -> TransactionResult<Vec<Record>> {
        Ok(self.execute(AccessMode::Write, statement).await?)
    }

    /// 执行返回匹配数量的写语句
    ///
    /// `count_column` 为 0 时回滚并返回 `NoMatch`，否则提交并返回匹配数。
    pub async fn write_matching(
        &self,
        statement: &Statement,
        count_column: &str,
    ) -> TransactionResult<i64> {
        debug!("write transaction: {}", statement.text);
        let mut txn = self.storage.begin(AccessMode::Write).await?;

        let matched = match txn.run(statement).await {
            Ok(records) => records
                .first()
                .map(|record| record.integer(count_column))
                .transpose(),
            Err(e) => Err(e),
        };

        match matched {
            Ok(Some(n)) if n > 0 => {
                txn.commit().await?;
                Ok(n)
            }
            Ok(_) => {
                txn.rollback().await?;
                Err(TransactionError::NoMatch)
            }
            Err(e) => {
                abandon(txn).await;
                Err(e.into())
            }
        }
    }
}
