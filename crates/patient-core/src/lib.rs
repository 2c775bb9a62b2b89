//! patient-core: aplicación incremental de funciones de un único registro.
//!
//! Una función `Fn(Fields) -> R` se envuelve junto a un oráculo de
//! completitud; los campos del registro pueden llegar en cualquier orden y
//! agrupación, y la función se ejecuta en cuanto el oráculo acepta el
//! acumulado.
pub mod applicator;
pub mod errors;
pub mod merge;
pub mod oracle;
pub mod typed;

pub use applicator::{make_patient, Applicator, ApplicatorBuilder, Applied, SharedOracle, Target};
pub use errors::PatientError;
pub use merge::{merge_fields, Fields};
pub use oracle::{CompletenessOracle, FnOracle, RequiredKeys, TryFnOracle};
pub use typed::{make_patient_typed, DeserializeOracle};
