//! 查询构建模块
//!
//! 请求参数 → 过滤/排序指令 → 参数化 Cypher 语句：
//! - `fields`：字段到节点别名的声明式映射
//! - `params`：`searchTerm,sortDirection` 参数解析
//! - `builder`：员工 / 部门读查询
//! - `mutation`：创建、更新与 Schema 语句

pub mod builder;
pub mod error;
pub mod fields;
pub mod mutation;
pub mod params;
pub mod statement;

pub use builder::{department_query, employee_query};
pub use error::{QueryError, QueryResult};
pub use fields::{FieldSpec, FieldTable, FieldTarget, DEPARTMENT_FIELDS, EMPLOYEE_FIELDS};
pub use params::{parse_params, FilterDirective, ParsedQuerySpec, SortDirection, SortDirective};
pub use statement::{Column, ColumnKind, Statement, Value};
