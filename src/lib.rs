//! patient-rust
//!
//! Fachada del workspace:
//! - Reexporta el aplicador incremental (`patient-core`) y los esquemas
//!   declarativos (`patient-schema`).
//! - Expone `config`, `logging` y `errors` para el binario demo.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod demo;
pub mod errors;
pub mod logging;

pub use patient_core::{make_patient, make_patient_typed, merge_fields, Applicator, ApplicatorBuilder, Applied,
                       CompletenessOracle, DeserializeOracle, Fields, FnOracle, PatientError, RequiredKeys, TryFnOracle};
pub use patient_schema::{patient_schema, FieldType, Schema};

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn facade_reexports_work_together() {
		let p = make_patient(patient_schema! { required { a: Integer } }, |f: Fields| f["a"].as_i64());
		let out = p.apply(json!({"a": 41})).expect("apply");
		assert_eq!(out.complete(), Some(Some(41)));
	}
}
