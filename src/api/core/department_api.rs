//! 部门 API - 核心层

use log::info;
use std::sync::Arc;

use crate::api::core::CoreResult;
use crate::model::{DepartmentRecord, NewDepartment};
use crate::query::mutation;
use crate::query::{department_query, parse_params, DEPARTMENT_FIELDS};
use crate::storage::StorageClient;
use crate::transaction::{shape_departments, TransactionExecutor};

pub struct DepartmentApi<S: StorageClient + 'static> {
    executor: TransactionExecutor<S>,
}

impl<S: StorageClient + 'static> DepartmentApi<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            executor: TransactionExecutor::new(storage),
        }
    }

    /// 查询部门及其员工数
    ///
    /// employeeCount 过滤值必须是非负整数，否则在访问存储前返回校验错误。
    pub async fn list(&self, params: &[(String, String)]) -> CoreResult<Vec<DepartmentRecord>> {
        let spec = parse_params(params, &DEPARTMENT_FIELDS)?;
        let records = self.executor.read(&department_query(&spec)).await?;
        Ok(shape_departments(&records)?)
    }

    pub async fn create(&self, department: &NewDepartment) -> CoreResult<()> {
        self.executor
            .write(&mutation::create_department(&department.name))
            .await?;
        info!("Department {} ensured", department.name);
        Ok(())
    }
}
