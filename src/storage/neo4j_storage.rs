//! Neo4j 存储实现
//!
//! 通过 Bolt 协议访问 Neo4j。连接池在启动时创建一次，进程生命周期内一直持有。

use async_trait::async_trait;
use log::{debug, info};
use neo4rs::{query, BoltNull, BoltType, ConfigBuilder, Graph, Query, Row, Txn};
use std::fmt;

use crate::config::StoreConfig;
use crate::query::{Column, ColumnKind, Statement, Value};
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::storage_client::{AccessMode, Record, StorageClient, StorageTransaction};

#[derive(Clone)]
pub struct Neo4jStorage {
    graph: Graph,
    uri: String,
}

impl fmt::Debug for Neo4jStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jStorage").field("uri", &self.uri).finish()
    }
}

impl Neo4jStorage {
    pub async fn connect(config: &StoreConfig) -> StorageResult<Self> {
        let neo_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.username.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .build()
            .map_err(|e| StorageError::ConnectionError(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| StorageError::ConnectionError(e.to_string()))?;

        info!("Connected to graph store at {} (database {})", config.uri, config.database);
        Ok(Self {
            graph,
            uri: config.uri.clone(),
        })
    }
}

fn to_query(statement: &Statement) -> Query {
    statement
        .params
        .iter()
        .fold(query(&statement.text), |q, (name, value)| match value {
            Value::Null => q.param(name, BoltType::Null(BoltNull)),
            Value::Text(s) => q.param(name, s.as_str()),
            Value::Integer(n) => q.param(name, *n),
        })
}

fn decode_row(row: &Row, columns: &[Column]) -> StorageResult<Record> {
    let mut record = Record::new();
    for column in columns {
        let value = match column.kind {
            ColumnKind::Text => row
                .get::<Option<String>>(column.name)
                .map_err(|e| StorageError::decode(column.name, e.to_string()))?
                .map(Value::Text)
                .unwrap_or(Value::Null),
            ColumnKind::Integer => row
                .get::<i64>(column.name)
                .map(Value::Integer)
                .map_err(|e| StorageError::decode(column.name, e.to_string()))?,
        };
        record.insert(column.name, value);
    }
    Ok(record)
}

#[async_trait]
impl StorageClient for Neo4jStorage {
    async fn begin(&self, mode: AccessMode) -> StorageResult<Box<dyn StorageTransaction>> {
        let txn = self.graph.start_txn().await?;
        debug!("Opened {} transaction", mode);
        Ok(Box::new(Neo4jTransaction { txn }))
    }

    async fn verify(&self) -> StorageResult<()> {
        self.graph.run(query("RETURN 1")).await?;
        Ok(())
    }
}

struct Neo4jTransaction {
    txn: Txn,
}

#[async_trait]
impl StorageTransaction for Neo4jTransaction {
    async fn run(&mut self, statement: &Statement) -> StorageResult<Vec<Record>> {
        let q = to_query(statement);
        if statement.columns.is_empty() {
            self.txn.run(q).await?;
            return Ok(Vec::new());
        }

        let mut stream = self.txn.execute(q).await?;
        let mut records = Vec::new();
        while let Some(row) = stream.next(self.txn.handle()).await? {
            records.push(decode_row(&row, &statement.columns)?);
        }
        Ok(records)
    }

    async fn commit(self: Box<Self>) -> StorageResult<()> {
        self.txn
            .commit()
            .await
            .map_err(|e| StorageError::TransactionError(e.to_string()))
    }

    async fn rollback(self: Box<Self>) -> StorageResult<()> {
        self.txn
            .rollback()
            .await
            .map_err(|e| StorageError::TransactionError(e.to_string()))
    }
}
