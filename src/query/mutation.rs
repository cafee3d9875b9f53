//! 写语句构建：创建 / 更新员工与部门，以及启动时的 Schema 语句

use crate::query::builder::LAST_NAME_INDEX;
use crate::query::statement::{Column, Statement};

/// Employee attributes an update may SET. Anything else is dropped.
pub const UPDATABLE_EMPLOYEE_FIELDS: [&str; 2] = ["firstName", "lastName"];

/// Column reporting how many nodes an update matched.
pub const MATCHED_COLUMN: &str = "matched";

pub fn create_employee(first_name: &str, last_name: &str, department: Option<&str>) -> Statement {
    match department {
        Some(department) => Statement::new(
            "MERGE (d:Department {name: $department})\n\
             CREATE (e:Employee {firstName: $firstName, lastName: $lastName})-[:WORKS_IN]->(d)",
        )
        .with_param("firstName", first_name)
        .with_param("lastName", last_name)
        .with_param("department", department),
        None => Statement::new("CREATE (e:Employee {firstName: $firstName, lastName: $lastName})")
            .with_param("firstName", first_name)
            .with_param("lastName", last_name),
    }
}

/// Departments are keyed by name, so creation merges.
pub fn create_department(name: &str) -> Statement {
    Statement::new("MERGE (d:Department {name: $name})").with_param("name", name)
}

/// 按 (firstName, lastName) 匹配并更新员工
///
/// 匹配到多个节点时全部更新；返回的 `matched` 列供调用方判断是否命中。
/// `changes` 中不在白名单内的字段被忽略。
pub fn update_employee(
    first_name: &str,
    last_name: &str,
    changes: &[(&str, String)],
) -> Statement {
    let mut stmt = Statement::new(String::new())
        .with_param("matchFirstName", first_name)
        .with_param("matchLastName", last_name);

    let mut assignments = Vec::new();
    for field in UPDATABLE_EMPLOYEE_FIELDS {
        if let Some((_, value)) = changes.iter().find(|(name, _)| *name == field) {
            assignments.push(format!("e.{} = ${}", field, field));
            stmt = stmt.with_param(field, value.as_str());
        }
    }

    let mut clauses =
        vec!["MATCH (e:Employee {firstName: $matchFirstName, lastName: $matchLastName})".to_string()];
    if !assignments.is_empty() {
        clauses.push(format!("SET {}", assignments.join(", ")));
    }
    clauses.push(format!("RETURN count(e) AS {}", MATCHED_COLUMN));

    stmt.text = clauses.join("\n");
    stmt.with_columns(&[Column::integer(MATCHED_COLUMN)])
}

/// Idempotent DDL run once at startup.
pub fn schema_statements() -> Vec<Statement> {
    vec![
        Statement::new(format!(
            "CREATE FULLTEXT INDEX {} IF NOT EXISTS\nFOR (n:Employee)\nON EACH [n.lastName]",
            LAST_NAME_INDEX
        )),
        Statement::new(
            "CREATE CONSTRAINT department_name IF NOT EXISTS\nFOR (d:Department)\nREQUIRE d.name IS UNIQUE",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::statement::Value;

    #[test]
    fn test_create_employee_binds_names() {
        let stmt = create_employee("Ann", "O'Hara", None);
        assert_eq!(
            stmt.text,
            "CREATE (e:Employee {firstName: $firstName, lastName: $lastName})"
        );
        assert_eq!(stmt.param("lastName"), Some(&Value::from("O'Hara")));
        assert!(stmt.columns.is_empty());
    }

    #[test]
    fn test_create_employee_links_department() {
        let stmt = create_employee("Ann", "Lee", Some("Sales"));
        assert!(stmt.text.starts_with("MERGE (d:Department {name: $department})"));
        assert!(stmt.text.ends_with("-[:WORKS_IN]->(d)"));
        assert_eq!(stmt.param("department"), Some(&Value::from("Sales")));
    }

    #[test]
    fn test_update_sets_only_allowed_fields() {
        let changes = vec![
            ("lastName", "Smith".to_string()),
            ("salary", "1000".to_string()),
        ];
        let stmt = update_employee("John", "Doe", &changes);
        assert_eq!(
            stmt.text,
            "MATCH (e:Employee {firstName: $matchFirstName, lastName: $matchLastName})\n\
             SET e.lastName = $lastName\n\
             RETURN count(e) AS matched"
        );
        assert_eq!(stmt.param("matchFirstName"), Some(&Value::from("John")));
        assert_eq!(stmt.param("salary"), None);
        assert_eq!(stmt.columns, vec![Column::integer("matched")]);
    }

    #[test]
    fn test_update_without_changes_only_counts() {
        let stmt = update_employee("John", "Doe", &[]);
        assert!(!stmt.text.contains("SET"));
        assert!(stmt.text.ends_with("RETURN count(e) AS matched"));
    }

    #[test]
    fn test_schema_statements_are_idempotent() {
        for stmt in schema_statements() {
            assert!(stmt.text.contains("IF NOT EXISTS"));
        }
    }
}
