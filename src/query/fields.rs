//! 字段映射表
//!
//! 请求参数名 → (节点别名, 属性, 取值转换)。解析器用它识别字段并做类型转换，
//! 构建器用它决定 WHERE / ORDER BY 中的限定名。

use std::fmt;

use crate::query::error::{QueryError, QueryResult};
use crate::query::statement::Value;

/// Alias bound to the Employee node in every employee statement.
pub const EMPLOYEE_ALIAS: &str = "e";
/// Alias bound to the Department node in every statement.
pub const DEPARTMENT_ALIAS: &str = "d";

/// 字段在查询中的落点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    /// 节点属性，渲染为 `alias.attribute`
    Node {
        alias: &'static str,
        attribute: &'static str,
    },
    /// WITH 子句投影出的计算列，直接按名称引用
    Computed { name: &'static str },
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldTarget::Node { alias, attribute } => write!(f, "{}.{}", alias, attribute),
            FieldTarget::Computed { name } => write!(f, "{}", name),
        }
    }
}

/// 搜索词到绑定值的转换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Text,
    NonNegativeInteger,
}

impl Coercion {
    pub fn apply(&self, field: &str, raw: &str) -> QueryResult<Value> {
        match self {
            Coercion::Text => Ok(Value::Text(raw.to_string())),
            Coercion::NonNegativeInteger => match raw.trim().parse::<i64>() {
                Ok(n) if n >= 0 => Ok(Value::Integer(n)),
                _ => Err(QueryError::NotAnInteger {
                    field: field.to_string(),
                    value: raw.to_string(),
                }),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name as it appears in the query string; also used as the bound parameter name.
    pub name: &'static str,
    pub target: FieldTarget,
    pub coercion: Coercion,
}

/// 有序的字段表
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    fields: &'static [FieldSpec],
}

impl FieldTable {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn lookup(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }
}

pub const EMPLOYEE_FIELDS: FieldTable = FieldTable::new(&[
    FieldSpec {
        name: "firstName",
        target: FieldTarget::Node {
            alias: EMPLOYEE_ALIAS,
            attribute: "firstName",
        },
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "lastName",
        target: FieldTarget::Node {
            alias: EMPLOYEE_ALIAS,
            attribute: "lastName",
        },
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "department",
        target: FieldTarget::Node {
            alias: DEPARTMENT_ALIAS,
            attribute: "name",
        },
        coercion: Coercion::Text,
    },
]);

pub const DEPARTMENT_FIELDS: FieldTable = FieldTable::new(&[
    FieldSpec {
        name: "department",
        target: FieldTarget::Node {
            alias: DEPARTMENT_ALIAS,
            attribute: "name",
        },
        coercion: Coercion::Text,
    },
    FieldSpec {
        name: "employeeCount",
        target: FieldTarget::Computed {
            name: "employeeCount",
        },
        coercion: Coercion::NonNegativeInteger,
    },
]);
