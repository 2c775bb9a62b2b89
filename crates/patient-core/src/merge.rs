//! Utilidades para fusionar registros parciales de forma determinista.
//!
//! El merge es "shallow": las claves del parcial más reciente reemplazan a las
//! acumuladas. Objetos anidados se reemplazan completos; no hay deep-merge.

use serde_json::{Map, Value};

/// Registro de campos (nombre -> valor), tanto acumulado como parcial.
pub type Fields = Map<String, Value>;

/// Merge shallow de registros: las claves de `partial` sobreescriben las de `acc`.
///
/// Ninguno de los dos argumentos se modifica; se devuelve un registro nuevo.
pub fn merge_fields(acc: &Fields, partial: &Fields) -> Fields {
    let mut out = acc.clone();
    for (k, v) in partial.iter() {
        out.insert(k.clone(), v.clone());
    }
    out
}

/// Nombre corto del tipo JSON de `value`, usado en mensajes de error.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
