//! 过滤 / 排序参数解析
//!
//! 每个参数值的格式为 `searchTerm,sortDirection`，两部分都可省略。
//! 取最后一个逗号作为分隔：左边是搜索词，右边是排序方向。

use std::collections::HashSet;

use crate::query::error::QueryResult;
use crate::query::fields::{FieldSpec, FieldTable};
use crate::query::statement::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only `asc` / `desc` (any case) are recognised.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Descending)
        } else {
            None
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDirective {
    pub field: &'static FieldSpec,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub field: &'static FieldSpec,
    pub direction: SortDirection,
}

/// 解析后的查询描述，指令顺序与请求参数顺序一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuerySpec {
    pub filters: Vec<FilterDirective>,
    pub sorts: Vec<SortDirective>,
}

impl ParsedQuerySpec {
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sorts.is_empty()
    }

    pub fn filter_for(&self, field: &str) -> Option<&FilterDirective> {
        self.filters.iter().find(|f| f.field.name == field)
    }

    /// Drops the filter on `field`, keeping its sort directive.
    pub fn without_filter(mut self, field: &str) -> Self {
        self.filters.retain(|f| f.field.name != field);
        self
    }
}

/// Splits a raw value into `(search term, direction slot)`.
fn split_raw(raw: &str) -> (&str, Option<&str>) {
    match raw.rsplit_once(',') {
        Some((term, direction)) => (term, Some(direction)),
        None => (raw, None),
    }
}

/// 将请求参数解析为过滤和排序指令
///
/// 未知字段被忽略；同名参数只取第一次出现的值。
/// 需要数值转换的字段在这里就会失败，不会走到存储层。
pub fn parse_params(params: &[(String, String)], table: &FieldTable) -> QueryResult<ParsedQuerySpec> {
    let mut spec = ParsedQuerySpec::default();
    let mut seen = HashSet::new();

    for (name, raw) in params {
        let Some(field) = table.lookup(name) else {
            continue;
        };
        if !seen.insert(field.name) || raw.is_empty() {
            continue;
        }

        let (term, direction) = split_raw(raw);
        if !term.is_empty() {
            let value = field.coercion.apply(field.name, term)?;
            spec.filters.push(FilterDirective { field, value });
        }
        if let Some(direction) = direction.and_then(SortDirection::parse) {
            spec.sorts.push(SortDirective { field, direction });
        }
    }

    Ok(spec)
}
