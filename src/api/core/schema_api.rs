//! Schema 操作 API - 核心层
//!
//! 启动时幂等地创建全文索引与唯一约束

use crate::api::core::CoreResult;
use crate::query::mutation::schema_statements;
use crate::storage::StorageClient;
use crate::transaction::TransactionExecutor;
use std::sync::Arc;

/// Schema 操作 API - 核心层
pub struct SchemaApi<S: StorageClient + 'static> {
    executor: TransactionExecutor<S>,
}

impl<S: StorageClient + 'static> SchemaApi<S> {
    /// 创建新的 Schema API 实例
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            executor: TransactionExecutor::new(storage),
        }
    }

    /// 确保索引和约束存在
    ///
    /// 每条 DDL 单独一个写事务（Neo4j 不允许 schema 与数据写入混在同一事务里）。
    pub async fn ensure_schema(&self) -> CoreResult<()> {
        for statement in schema_statements() {
            self.executor.write(&statement).await?;
            log::info!("Schema ensured: {}", statement.text.replace('\n', " "));
        }
        Ok(())
    }
}
