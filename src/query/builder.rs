//! 查询构建器
//!
//! 由解析后的指令拼装 Cypher 语句：MATCH → (全文检索) → WHERE → RETURN → ORDER BY。
//! 语句结构只取决于指令的字段和顺序，过滤值一律走绑定参数。

use crate::query::params::{FilterDirective, ParsedQuerySpec, SortDirective};
use crate::query::statement::{Column, Statement};

/// Name of the full-text index over `Employee.lastName`.
pub const LAST_NAME_INDEX: &str = "lastNameIndex";

/// Bound parameter carrying the full-text search term.
pub const SEARCH_PARAM: &str = "search";

const EMPLOYEE_MATCH: &str = "MATCH (e:Employee)-[:WORKS_IN]->(d:Department)";
const EMPLOYEE_RETURN: &str =
    "RETURN e.firstName AS firstName, e.lastName AS lastName, d.name AS department";

const DEPARTMENT_MATCH: &str = "MATCH (d:Department)\n\
     OPTIONAL MATCH (e:Employee)-[:WORKS_IN]->(d)\n\
     WITH d, count(e) AS employeeCount";
const DEPARTMENT_RETURN: &str = "RETURN d.name AS department, employeeCount";

pub const EMPLOYEE_COLUMNS: [Column; 3] = [
    Column::text("firstName"),
    Column::text("lastName"),
    Column::text("department"),
];

pub const DEPARTMENT_COLUMNS: [Column; 2] = [
    Column::text("department"),
    Column::integer("employeeCount"),
];

/// 逐子句拼装语句，同时收集绑定参数
struct ClauseWriter {
    clauses: Vec<String>,
    statement: Statement,
}

impl ClauseWriter {
    fn new() -> Self {
        Self {
            clauses: Vec::new(),
            statement: Statement::new(String::new()),
        }
    }

    fn clause(&mut self, clause: impl Into<String>) -> &mut Self {
        self.clauses.push(clause.into());
        self
    }

    fn where_clause(&mut self, filters: &[FilterDirective]) -> &mut Self {
        if filters.is_empty() {
            return self;
        }
        let conditions: Vec<String> = filters
            .iter()
            .map(|filter| {
                let param = filter.field.name;
                self.statement
                    .params
                    .push((param.to_string(), filter.value.clone()));
                format!("{} = ${}", filter.field.target, param)
            })
            .collect();
        self.clause(format!("WHERE {}", conditions.join(" AND ")))
    }

    fn order_by(&mut self, sorts: &[SortDirective]) -> &mut Self {
        if sorts.is_empty() {
            return self;
        }
        let keys: Vec<String> = sorts
            .iter()
            .map(|sort| format!("{} {}", sort.field.target, sort.direction.as_keyword()))
            .collect();
        self.clause(format!("ORDER BY {}", keys.join(", ")))
    }

    fn finish(mut self, columns: &[Column]) -> Statement {
        self.statement.text = self.clauses.join("\n");
        self.statement.with_columns(columns)
    }
}

/// 员工查询
///
/// `search` 非空时改用全文索引作为起点，并丢弃 lastName 上的等值过滤
/// （两者互斥），lastName 的排序指令保留。没有用户排序时按相关度降序。
pub fn employee_query(spec: &ParsedQuerySpec, search: Option<&str>) -> Statement {
    let search = search.filter(|term| !term.is_empty());
    let mut writer = ClauseWriter::new();

    let spec = match search {
        Some(term) => {
            writer
                .clause(format!(
                    "CALL db.index.fulltext.queryNodes('{}', ${}) YIELD node AS e, score",
                    LAST_NAME_INDEX, SEARCH_PARAM
                ))
                .clause("MATCH (e)-[:WORKS_IN]->(d:Department)");
            writer
                .statement
                .params
                .push((SEARCH_PARAM.to_string(), term.into()));
            spec.clone().without_filter("lastName")
        }
        None => {
            writer.clause(EMPLOYEE_MATCH);
            spec.clone()
        }
    };

    writer.where_clause(&spec.filters).clause(EMPLOYEE_RETURN);
    if search.is_some() && spec.sorts.is_empty() {
        writer.clause("ORDER BY score DESC");
    } else {
        writer.order_by(&spec.sorts);
    }
    writer.finish(&EMPLOYEE_COLUMNS)
}

/// 部门查询，employeeCount 每次重新统计
pub fn department_query(spec: &ParsedQuerySpec) -> Statement {
    let mut writer = ClauseWriter::new();
    writer
        .clause(DEPARTMENT_MATCH)
        .where_clause(&spec.filters)
        .clause(DEPARTMENT_RETURN)
        .order_by(&spec.sorts);
    writer.finish(&DEPARTMENT_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fields::{DEPARTMENT_FIELDS, EMPLOYEE_FIELDS};
    use crate::query::params::parse_params;
    use crate::query::statement::Value;

    fn employee_spec(items: &[(&str, &str)]) -> ParsedQuerySpec {
        let params: Vec<(String, String)> = items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        parse_params(&params, &EMPLOYEE_FIELDS).expect("parse")
    }

    #[test]
    fn test_empty_spec_has_no_where_or_order() {
        let stmt = employee_query(&ParsedQuerySpec::default(), None);
        assert_eq!(stmt.text, format!("{}\n{}", EMPLOYEE_MATCH, EMPLOYEE_RETURN));
        assert!(stmt.params.is_empty());

        let stmt = department_query(&ParsedQuerySpec::default());
        assert!(!stmt.text.contains("WHERE"));
        assert!(!stmt.text.contains("ORDER BY"));
    }

    #[test]
    fn test_employee_filters_and_sorts() {
        let spec = employee_spec(&[
            ("lastName", "Smith,asc"),
            ("department", "Sales"),
            ("firstName", ",desc"),
        ]);
        let stmt = employee_query(&spec, None);
        assert_eq!(
            stmt.text,
            "MATCH (e:Employee)-[:WORKS_IN]->(d:Department)\n\
             WHERE e.lastName = $lastName AND d.name = $department\n\
             RETURN e.firstName AS firstName, e.lastName AS lastName, d.name AS department\n\
             ORDER BY e.lastName ASC, e.firstName DESC"
        );
        assert_eq!(stmt.param("lastName"), Some(&Value::from("Smith")));
        assert_eq!(stmt.param("department"), Some(&Value::from("Sales")));
        assert_eq!(stmt.columns, EMPLOYEE_COLUMNS.to_vec());
    }

    #[test]
    fn test_fulltext_search_replaces_last_name_filter() {
        let spec = employee_spec(&[("lastName", "Smith,desc"), ("firstName", "Ann")]);
        let stmt = employee_query(&spec, Some("Smi*"));
        assert!(stmt
            .text
            .starts_with("CALL db.index.fulltext.queryNodes('lastNameIndex', $search)"));
        assert!(stmt.text.contains("WHERE e.firstName = $firstName\n"));
        assert!(!stmt.text.contains("$lastName"));
        assert!(stmt.text.ends_with("ORDER BY e.lastName DESC"));
        assert_eq!(stmt.param("search"), Some(&Value::from("Smi*")));
        assert_eq!(stmt.param("lastName"), None);
    }

    #[test]
    fn test_fulltext_search_defaults_to_score_order() {
        let stmt = employee_query(&ParsedQuerySpec::default(), Some("Smith"));
        assert!(stmt.text.ends_with("ORDER BY score DESC"));

        let plain = employee_query(&ParsedQuerySpec::default(), Some(""));
        assert!(plain.text.starts_with(EMPLOYEE_MATCH));
    }

    #[test]
    fn test_department_count_filter_is_bound() {
        let params = vec![
            ("employeeCount".to_string(), "2,desc".to_string()),
            ("department".to_string(), ",asc".to_string()),
        ];
        let spec = parse_params(&params, &DEPARTMENT_FIELDS).expect("parse");
        let stmt = department_query(&spec);
        assert!(stmt.text.contains("WITH d, count(e) AS employeeCount\nWHERE employeeCount = $employeeCount\n"));
        assert!(stmt.text.ends_with("ORDER BY employeeCount DESC, d.name ASC"));
        assert_eq!(stmt.param("employeeCount"), Some(&Value::Integer(2)));
    }
}
