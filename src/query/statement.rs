//! 参数化语句
//!
//! 语句文本与绑定值分开保存，外部输入只会出现在 `params` 中

use serde::Serialize;
use std::fmt;

/// 绑定值 / 结果值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
}

/// 结果列描述，存储驱动据此解码记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub params: Vec<(String, Value)>,
    pub columns: Vec<Column>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn with_columns(mut self, columns: &[Column]) -> Self {
        self.columns.extend_from_slice(columns);
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        for (name, value) in &self.params {
            writeln!(f, "  ${} = {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_lookup() {
        let stmt = Statement::new("RETURN $a, $b")
            .with_param("a", "x")
            .with_param("b", 2i64);
        assert_eq!(stmt.param("a"), Some(&Value::Text("x".to_string())));
        assert_eq!(stmt.param("b"), Some(&Value::Integer(2)));
        assert_eq!(stmt.param("c"), None);
    }

    #[test]
    fn test_display_lists_params_after_text() {
        let stmt = Statement::new("MATCH (n) WHERE n.name = $name RETURN n")
            .with_param("name", "O'Brien");
        let rendered = stmt.to_string();
        assert!(rendered.starts_with("MATCH (n) WHERE n.name = $name RETURN n\n"));
        assert!(rendered.contains("$name = \"O'Brien\""));
    }
}
