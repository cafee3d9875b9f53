//! 员工 API - 核心层
//!
//! 解析 → 构建 → 事务执行 → 整形。所有输入校验都发生在打开事务之前。

use log::info;
use std::sync::Arc;

use crate::api::core::{CoreError, CoreResult};
use crate::model::{EmployeeChanges, EmployeeId, EmployeeRecord, NewEmployee};
use crate::query::builder::SEARCH_PARAM;
use crate::query::mutation::{self, MATCHED_COLUMN};
use crate::query::{employee_query, parse_params, EMPLOYEE_FIELDS};
use crate::storage::StorageClient;
use crate::transaction::{shape_employees, TransactionError, TransactionExecutor};

pub struct EmployeeApi<S: StorageClient + 'static> {
    executor: TransactionExecutor<S>,
}

impl<S: StorageClient + 'static> EmployeeApi<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            executor: TransactionExecutor::new(storage),
        }
    }

    /// 查询员工
    ///
    /// `params` 保持请求中的顺序；`search` 参数启用姓氏全文检索。
    pub async fn list(&self, params: &[(String, String)]) -> CoreResult<Vec<EmployeeRecord>> {
        let spec = parse_params(params, &EMPLOYEE_FIELDS)?;
        let search = params
            .iter()
            .find(|(name, _)| name == SEARCH_PARAM)
            .map(|(_, value)| value.as_str());

        let statement = employee_query(&spec, search);
        let records = self.executor.read(&statement).await?;
        Ok(shape_employees(&records)?)
    }

    /// 创建员工（不保证幂等，重复调用会产生重复节点）
    pub async fn create(&self, employee: &NewEmployee) -> CoreResult<()> {
        let statement = mutation::create_employee(
            &employee.first_name,
            &employee.last_name,
            employee.department.as_deref(),
        );
        self.executor.write(&statement).await?;
        info!(
            "Created employee {} {}",
            employee.first_name, employee.last_name
        );
        Ok(())
    }

    /// 更新员工
    ///
    /// 同名员工全部更新，返回更新的节点数；一个都没匹配到时返回 `NotFound`。
    pub async fn update(&self, id: &EmployeeId, changes: &EmployeeChanges) -> CoreResult<i64> {
        let statement = mutation::update_employee(&id.first_name, &id.last_name, changes.fields());
        let matched = self
            .executor
            .write_matching(&statement, MATCHED_COLUMN)
            .await
            .map_err(|e| match e {
                TransactionError::NoMatch => CoreError::NotFound(format!(
                    "no employee named {} {}",
                    id.first_name, id.last_name
                )),
                other => other.into(),
            })?;
        if matched > 1 {
            info!(
                "Updated {} employees sharing the name {} {}",
                matched, id.first_name, id.last_name
            );
        }
        Ok(matched)
    }

    /// 删除员工：本版本未实现
    pub async fn delete(&self, _id: &str) -> CoreResult<()> {
        Err(CoreError::NotImplemented(
            "deleting employees is not implemented".to_string(),
        ))
    }
}
