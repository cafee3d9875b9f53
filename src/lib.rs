//! staffgraph - 员工 / 部门图谱的 HTTP 服务
//!
//! 在 Neo4j 中维护 `Employee` 和 `Department` 节点，通过 REST 接口查询和修改。
//! 所有用户输入都作为绑定参数传给数据库，查询文本只由固定片段拼成。

pub mod api;
pub mod config;
pub mod model;
pub mod query;
pub mod storage;
pub mod transaction;
pub mod utils;
