//! HTTP 服务器
//!
//! 持有存储句柄和各核心 API，由所有请求共享

use crate::api::core::{DepartmentApi, EmployeeApi};
use crate::storage::StorageClient;
use std::sync::Arc;

/// HTTP 服务器
///
/// 存储句柄在进程启动时创建后注入，这里不负责其生命周期
pub struct HttpServer<S: StorageClient + 'static> {
    storage: Arc<S>,
    employee_api: EmployeeApi<S>,
    department_api: DepartmentApi<S>,
}

impl<S: StorageClient + 'static> HttpServer<S> {
    /// 创建新的 HTTP 服务器
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            employee_api: EmployeeApi::new(storage.clone()),
            department_api: DepartmentApi::new(storage.clone()),
            storage,
        }
    }

    /// 获取存储句柄
    pub fn get_storage(&self) -> &S {
        &self.storage
    }

    /// 获取员工 API
    pub fn get_employee_api(&self) -> &EmployeeApi<S> {
        &self.employee_api
    }

    /// 获取部门 API
    pub fn get_department_api(&self) -> &DepartmentApi<S> {
        &self.department_api
    }
}
