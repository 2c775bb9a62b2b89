//! Demo del saludo paciente: suministra `name`, `greeting` y `excitedness`
//! en llamadas separadas y reporta cada transición.
//!
//! Se usa desde `main.rs` y desde los tests de integración del crate raíz.

use std::fs;

use log::info;
use patient_core::{make_patient, make_patient_typed, Applied, Fields};
use patient_schema::{patient_schema, Schema};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::{AppConfig, MAX_EXCITEDNESS};
use crate::errors::{CoreError, DomainError};

/// Esquema del saludo con `decoration` opcional.
pub fn fancy_greet_schema() -> Schema {
    patient_schema! {
        required { greeting: String, name: String, excitedness: Number }
        optional { decoration: String }
    }
}

/// Función objetivo del demo. `decoration` envuelve el saludo si está presente.
///
/// `excitedness` se trunca y se acota a `[0, MAX_EXCITEDNESS]`.
pub fn fancy_greet(f: Fields) -> String {
    let text = |key: &str| f.get(key).and_then(Value::as_str).unwrap_or_default();
    let bangs = f.get("excitedness")
                 .and_then(Value::as_f64)
                 .map_or(0, |n| n.clamp(0.0, MAX_EXCITEDNESS as f64) as usize);
    let decoration = text("decoration");
    format!("{decoration}{} {}{}{decoration}", text("greeting"), text("name"), "!".repeat(bangs))
}

/// Entrada tipada equivalente a `fancy_greet_schema`.
#[derive(Debug, Clone, Deserialize)]
pub struct GreetInput {
    pub greeting: String,
    pub name: String,
    pub excitedness: f64,
    #[serde(default)]
    pub decoration: Option<String>,
}

/// Esquema del demo: el de `PATIENT_SCHEMA_PATH` si está configurado, si no
/// el incorporado.
pub fn load_schema(cfg: &AppConfig) -> Result<Schema, CoreError> {
    match &cfg.schema_path {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            info!("demo:schema loaded path={}", path.display());
            Ok(Schema::from_json(&source)?)
        }
        None => Ok(fancy_greet_schema()),
    }
}

/// Ejecuta el demo y devuelve las líneas a imprimir.
pub fn run_demo(cfg: &AppConfig) -> Result<Vec<String>, CoreError> {
    let schema = load_schema(cfg)?;
    let patient = make_patient(schema, fancy_greet);

    let partials = [json!({ "name": cfg.demo.name }),
                    json!({ "greeting": cfg.demo.greeting }),
                    json!({ "excitedness": cfg.demo.excitedness })];

    let mut lines = Vec::new();
    let mut current = patient;
    for (i, partial) in partials.into_iter().enumerate() {
        let step = i + 1;
        match current.apply(partial)? {
            Applied::Complete(out) => {
                lines.push(format!("[{step}] resultado: {out}"));
                return finish_with_typed(cfg, lines);
            }
            Applied::Pending(next) => {
                lines.push(format!("[{step}] pendiente, faltan: {}", next.missing_fields().join(", ")));
                current = next;
            }
        }
    }
    // Un esquema externo puede exigir campos que el demo no suministra.
    Err(DomainError::Incomplete(current.missing_fields()).into())
}

// Misma secuencia por la vía tipada, en una sola llamada.
fn finish_with_typed(cfg: &AppConfig, mut lines: Vec<String>) -> Result<Vec<String>, CoreError> {
    let typed = make_patient_typed(|i: GreetInput| {
        let mut f = Fields::new();
        f.insert("greeting".into(), json!(i.greeting));
        f.insert("name".into(), json!(i.name));
        f.insert("excitedness".into(), json!(i.excitedness));
        if let Some(d) = i.decoration {
            f.insert("decoration".into(), json!(d));
        }
        fancy_greet(f)
    });
    let all = json!({ "greeting": cfg.demo.greeting, "name": cfg.demo.name, "excitedness": cfg.demo.excitedness });
    match typed.apply(all)? {
        Applied::Complete(out) => {
            let out = out.map_err(|e| DomainError::Validation(e.to_string()))?;
            lines.push(format!("[tipado] resultado: {out}"));
            Ok(lines)
        }
        // DeserializeOracle no sabe enumerar campos: se reportan los recibidos.
        Applied::Pending(next) => {
            Err(DomainError::Validation(format!("entrada tipada rechazada: {:?}",
                                                next.accumulated().keys().collect::<Vec<_>>())).into())
        }
    }
}
