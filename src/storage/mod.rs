//! 存储模块
//!
//! 图数据库被视为一个事务化的语句执行器：
//! - `StorageClient` / `StorageTransaction`：会话与事务抽象
//! - `Neo4jStorage`：基于 neo4rs 的实现
//! - `MockStorage`：测试用的脚本化实现

pub mod error;
pub mod neo4j_storage;
pub mod storage_client;
pub mod test_mock;

pub use error::{StorageError, StorageResult};
pub use neo4j_storage::Neo4jStorage;
pub use storage_client::{AccessMode, Record, StorageClient, StorageTransaction};
pub use test_mock::{MockStorage, TransactionLog, TransactionOutcome};
