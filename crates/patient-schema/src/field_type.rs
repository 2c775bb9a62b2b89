use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Forma esperada de un campo del registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    /// Cualquier número JSON (entero o flotante).
    Number,
    /// Número sin parte fraccionaria representable como `i64` o `u64`.
    Integer,
    Bool,
    Array,
    Object,
    Null,
    Any,
    Nullable(Box<FieldType>),
}

impl FieldType {
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Any, _) => true,
            (FieldType::Nullable(_), Value::Null) => true,
            (FieldType::Nullable(inner), v) => inner.matches(v),
            (FieldType::String, Value::String(_)) => true,
            (FieldType::Number, Value::Number(_)) => true,
            (FieldType::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (FieldType::Bool, Value::Bool(_)) => true,
            (FieldType::Array, Value::Array(_)) => true,
            (FieldType::Object, Value::Object(_)) => true,
            (FieldType::Null, Value::Null) => true,
            _ => false,
        }
    }

    /// Acepta además `null`.
    pub fn nullable(self) -> Self {
        match self {
            FieldType::Nullable(_) | FieldType::Any | FieldType::Null => self,
            other => FieldType::Nullable(Box::new(other)),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Number => f.write_str("number"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Bool => f.write_str("boolean"),
            FieldType::Array => f.write_str("array"),
            FieldType::Object => f.write_str("object"),
            FieldType::Null => f.write_str("null"),
            FieldType::Any => f.write_str("any"),
            FieldType::Nullable(inner) => write!(f, "{inner} | null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_rejects_fractions() {
        assert!(FieldType::Integer.matches(&json!(2)));
        assert!(FieldType::Integer.matches(&json!(-2)));
        assert!(!FieldType::Integer.matches(&json!(2.5)));
        assert!(FieldType::Number.matches(&json!(2.5)));
    }

    #[test]
    fn nullable_wraps_once() {
        let t = FieldType::String.nullable().nullable();
        assert_eq!(t, FieldType::Nullable(Box::new(FieldType::String)));
        assert!(t.matches(&json!(null)));
        assert!(t.matches(&json!("x")));
        assert!(!t.matches(&json!(1)));
        assert_eq!(t.to_string(), "string | null");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let t: FieldType = serde_json::from_value(json!({"nullable": "integer"})).expect("decode");
        assert_eq!(t, FieldType::Integer.nullable());
    }
}
