//! 结果整形
//!
//! 员工查询每个 (员工, 部门) 组合返回一行，这里按 (firstName, lastName) 聚合部门。
//! 聚合前先做稳定排序保证同名记录相邻，聚合后再按每组首次出现的位置
//! 恢复存储返回的顺序（即用户 ORDER BY 的顺序）。

use crate::model::{DepartmentRecord, EmployeeRecord};
use crate::storage::{Record, StorageResult};

fn merge_departments(into: &mut Vec<String>, departments: Vec<String>) {
    for department in departments {
        if !into.contains(&department) {
            into.push(department);
        }
    }
}

/// 按姓名聚合员工记录，部门列表去重并保持发现顺序。幂等。
pub fn group_employees(rows: Vec<EmployeeRecord>) -> Vec<EmployeeRecord> {
    let mut indexed: Vec<(usize, EmployeeRecord)> = rows.into_iter().enumerate().collect();
    indexed.sort_by(|(_, a), (_, b)| {
        (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name))
    });

    let mut groups: Vec<(usize, EmployeeRecord)> = Vec::new();
    for (position, row) in indexed {
        match groups.last_mut() {
            Some((_, group))
                if group.first_name == row.first_name && group.last_name == row.last_name =>
            {
                merge_departments(&mut group.department, row.department);
            }
            _ => {
                let mut group = EmployeeRecord {
                    department: Vec::with_capacity(row.department.len()),
                    ..row
                };
                merge_departments(&mut group.department, row.department);
                groups.push((position, group));
            }
        }
    }

    groups.sort_by_key(|(position, _)| *position);
    groups.into_iter().map(|(_, group)| group).collect()
}

pub fn shape_employees(records: &[Record]) -> StorageResult<Vec<EmployeeRecord>> {
    let rows = records
        .iter()
        .map(|record| {
            Ok(EmployeeRecord {
                first_name: record.text("firstName")?,
                last_name: record.text("lastName")?,
                department: vec![record.text("department")?],
            })
        })
        .collect::<StorageResult<Vec<_>>>()?;
    Ok(group_employees(rows))
}

pub fn shape_departments(records: &[Record]) -> StorageResult<Vec<DepartmentRecord>> {
    records
        .iter()
        .map(|record| {
            Ok(DepartmentRecord {
                department: record.text("department")?,
                employee_count: record.integer("employeeCount")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    fn row(first: &str, last: &str, department: &str) -> EmployeeRecord {
        EmployeeRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            department: vec![department.to_string()],
        }
    }

    #[test]
    fn test_groups_scattered_rows() {
        // 按部门排序时同一员工的行并不相邻
        let rows = vec![
            row("John", "Smith", "Accounting"),
            row("Ann", "Lee", "Marketing"),
            row("John", "Smith", "Sales"),
        ];
        let grouped = group_employees(rows);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].first_name, "John");
        assert_eq!(grouped[0].department, vec!["Accounting", "Sales"]);
        assert_eq!(grouped[1].first_name, "Ann");
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let rows = vec![
            row("Zed", "Young", "Ops"),
            row("Ann", "Lee", "Sales"),
            row("Zed", "Young", "Sales"),
            row("Ann", "Lee", "Sales"),
        ];
        let once = group_employees(rows);
        let twice = group_employees(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once[1].department, vec!["Sales"]);
    }

    #[test]
    fn test_shape_employees_from_records() {
        let records = vec![
            Record::new()
                .with("firstName", "John")
                .with("lastName", "Smith")
                .with("department", "A"),
            Record::new()
                .with("firstName", "John")
                .with("lastName", "Smith")
                .with("department", "B"),
        ];
        let employees = shape_employees(&records).expect("shape");
        assert_eq!(employees, vec![EmployeeRecord {
            first_name: "John".into(),
            last_name: "Smith".into(),
            department: vec!["A".into(), "B".into()],
        }]);
    }

    #[test]
    fn test_shape_departments_keeps_zero_counts() {
        let records = vec![Record::new().with("department", "Empty").with("employeeCount", 0i64)];
        let departments = shape_departments(&records).expect("shape");
        assert_eq!(departments[0].employee_count, 0);

        let broken = vec![Record::new().with("department", "X")];
        assert!(matches!(
            shape_departments(&broken),
            Err(StorageError::DecodeError { .. })
        ));
    }
}
