//! 请求与响应模型
//!
//! 请求体的校验都在这里完成，保证校验失败时不会打开任何事务

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::api::core::{CoreError, CoreResult};
use crate::query::mutation::UPDATABLE_EMPLOYEE_FIELDS;

/// Employee identity as addressed in URLs: `{firstName}_{lastName}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeId {
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeId {
    pub fn parse(segment: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = segment.split('_').collect();
        match parts.as_slice() {
            [first, last] if !first.is_empty() && !last.is_empty() => Ok(Self {
                first_name: first.to_string(),
                last_name: last.to_string(),
            }),
            _ => Err(CoreError::Validation("bad user id".to_string())),
        }
    }
}

/// 员工姓名：非空，且不能含 `_`（否则无法作为路径 ID 的一部分）
fn validate_name(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{}: must not be empty", field)));
    }
    if value.contains('_') {
        return Err(CoreError::Validation(format!("{}: must not contain '_'", field)));
    }
    Ok(())
}

fn from_body<T: for<'de> Deserialize<'de>>(body: JsonValue) -> CoreResult<T> {
    serde_json::from_value(body).map_err(|e| CoreError::Validation(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl NewEmployee {
    pub fn from_body(body: JsonValue) -> CoreResult<Self> {
        let employee: Self = from_body(body)?;
        validate_name("firstName", &employee.first_name)?;
        validate_name("lastName", &employee.last_name)?;
        if let Some(department) = &employee.department {
            if department.trim().is_empty() {
                return Err(CoreError::Validation("department: must not be empty".to_string()));
            }
        }
        Ok(employee)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    pub fn from_body(body: JsonValue) -> CoreResult<Self> {
        let department: Self = from_body(body)?;
        if department.name.trim().is_empty() {
            return Err(CoreError::Validation("name: must not be empty".to_string()));
        }
        Ok(department)
    }
}

/// 员工更新内容，只保留白名单字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    fields: Vec<(&'static str, String)>,
}

impl EmployeeChanges {
    /// Unknown keys are dropped silently; allow-listed keys must hold valid names.
    pub fn from_body(body: JsonValue) -> CoreResult<Self> {
        let JsonValue::Object(map) = body else {
            return Err(CoreError::Validation(
                "request body must be a JSON object".to_string(),
            ));
        };

        let mut changes = Self::default();
        let mut errors = Vec::new();
        for field in UPDATABLE_EMPLOYEE_FIELDS {
            match map.get(field) {
                None => {}
                Some(JsonValue::String(value)) => match validate_name(field, value) {
                    Ok(()) => changes.fields.push((field, value.clone())),
                    Err(e) => errors.push(e.to_string()),
                },
                Some(_) => errors.push(format!("{}: not a string", field)),
            }
        }

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(CoreError::Validation(errors.join("; ")))
        }
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub department: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub department: String,
    pub employee_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_employee_id_parse() {
        let id = EmployeeId::parse("John_Doe").expect("valid id");
        assert_eq!(id.first_name, "John");
        assert_eq!(id.last_name, "Doe");

        for bad in ["JohnDoe", "John_Doe_Jr", "_Doe", "John_", ""] {
            let err = EmployeeId::parse(bad).expect_err(bad);
            assert_eq!(err, CoreError::Validation("bad user id".to_string()));
        }
    }

    #[test]
    fn test_new_employee_validation() {
        let employee = NewEmployee::from_body(json!({"firstName": "Ann", "lastName": "Lee"}))
            .expect("valid body");
        assert_eq!(employee.department, None);

        assert!(NewEmployee::from_body(json!({"firstName": "Ann"})).is_err());
        assert!(NewEmployee::from_body(json!({"firstName": "A_n", "lastName": "Lee"})).is_err());
        assert!(NewEmployee::from_body(json!({"firstName": " ", "lastName": "Lee"})).is_err());
        assert!(NewEmployee::from_body(
            json!({"firstName": "Ann", "lastName": "Lee", "department": ""})
        )
        .is_err());
    }

    #[test]
    fn test_changes_drop_unknown_keys() {
        let changes = EmployeeChanges::from_body(json!({"lastName": "Smith", "salary": 10}))
            .expect("valid body");
        assert_eq!(changes.fields(), &[("lastName", "Smith".to_string())]);

        let empty = EmployeeChanges::from_body(json!({})).expect("empty body");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_changes_reject_wrong_types() {
        let err = EmployeeChanges::from_body(json!({"firstName": 3, "lastName": true}))
            .expect_err("wrong types");
        assert_eq!(
            err,
            CoreError::Validation("firstName: not a string; lastName: not a string".to_string())
        );
        assert!(EmployeeChanges::from_body(json!(["lastName"])).is_err());
    }

    #[test]
    fn test_records_serialize_camel_case() {
        let record = DepartmentRecord {
            department: "Sales".to_string(),
            employee_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&record).expect("serialize"),
            json!({"department": "Sales", "employeeCount": 0})
        );
    }
}
