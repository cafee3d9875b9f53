//! 测试用 Mock 存储
//!
//! 按顺序回放预设的结果，并记录每个事务执行过的语句和结束方式

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::query::Statement;
use crate::storage::error::{StorageError, StorageResult};
use crate::storage::storage_client::{AccessMode, Record, StorageClient, StorageTransaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Committed,
    RolledBack,
}

#[derive(Debug, Clone)]
pub struct TransactionLog {
    pub mode: AccessMode,
    pub statements: Vec<Statement>,
    /// `None` while the transaction is still open (or was leaked).
    pub outcome: Option<TransactionOutcome>,
}

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<StorageResult<Vec<Record>>>,
    begin_error: Option<StorageError>,
    verify_error: Option<StorageError>,
    transactions: Vec<TransactionLog>,
}

#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<MockState>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the records returned by the next `run`. An empty queue yields no rows.
    pub fn push_records(&self, records: Vec<Record>) {
        self.state.lock().responses.push_back(Ok(records));
    }

    pub fn push_error(&self, error: StorageError) {
        self.state.lock().responses.push_back(Err(error));
    }

    /// Makes every `begin` fail, as an unreachable store would.
    pub fn fail_begin(&self, error: StorageError) {
        let mut state = self.state.lock();
        state.verify_error = Some(error.clone());
        state.begin_error = Some(error);
    }

    pub fn transactions(&self) -> Vec<TransactionLog> {
        self.state.lock().transactions.clone()
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.state
            .lock()
            .transactions
            .iter()
            .flat_map(|t| t.statements.iter().cloned())
            .collect()
    }
}

#[async_trait]
impl StorageClient for MockStorage {
    async fn begin(&self, mode: AccessMode) -> StorageResult<Box<dyn StorageTransaction>> {
        let mut state = self.state.lock();
        if let Some(err) = &state.begin_error {
            return Err(err.clone());
        }
        state.transactions.push(TransactionLog {
            mode,
            statements: Vec::new(),
            outcome: None,
        });
        Ok(Box::new(MockTransaction {
            index: state.transactions.len() - 1,
            state: self.state.clone(),
        }))
    }

    async fn verify(&self) -> StorageResult<()> {
        match &self.state.lock().verify_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

struct MockTransaction {
    index: usize,
    state: Arc<Mutex<MockState>>,
}

impl MockTransaction {
    fn finish(&self, outcome: TransactionOutcome) -> StorageResult<()> {
        let mut state = self.state.lock();
        let log = &mut state.transactions[self.index];
        if log.outcome.is_some() {
            return Err(StorageError::TransactionError("transaction already closed".into()));
        }
        log.outcome = Some(outcome);
        Ok(())
    }
}

#[async_trait]
impl StorageTransaction for MockTransaction {
    async fn run(&mut self, statement: &Statement) -> StorageResult<Vec<Record>> {
        let mut state = self.state.lock();
        state.transactions[self.index]
            .statements
            .push(statement.clone());
        state.responses.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn commit(self: Box<Self>) -> StorageResult<()> {
        self.finish(TransactionOutcome::Committed)
    }

    async fn rollback(self: Box<Self>) -> StorageResult<()> {
        self.finish(TransactionOutcome::RolledBack)
    }
}
