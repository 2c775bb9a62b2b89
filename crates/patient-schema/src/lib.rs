//! patient-schema: esquemas declarativos de campos para `patient-core`.
//!
//! `Schema` implementa `CompletenessOracle`, de modo que puede pasarse
//! directamente a `make_patient` o al builder del aplicador.
pub mod field_type;
pub mod macros;
pub mod schema;

pub use field_type::FieldType;
pub use schema::Schema;

#[cfg(test)]
mod tests {
	use super::*;
	use patient_core::CompletenessOracle;
	use serde_json::json;

	#[test]
	fn macro_builds_same_schema_as_builder() {
		let from_macro = patient_schema! {
			required { greeting: String, name: String, excitedness: Number }
			optional { decoration: String }
		};
		let by_hand = Schema::new().required("greeting", FieldType::String)
		                           .required("name", FieldType::String)
		                           .required("excitedness", FieldType::Number)
		                           .optional("decoration", FieldType::String);
		assert_eq!(from_macro, by_hand);
	}

	#[test]
	fn macro_without_optional_block() {
		let s = patient_schema! { required { id: Integer } };
		let mut c = patient_core::Fields::new();
		c.insert("id".into(), json!(7));
		assert_eq!(s.is_complete(&c), Ok(true));
	}
}
