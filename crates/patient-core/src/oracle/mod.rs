//! Contrato para oráculos de completitud.
//!
//! Un `CompletenessOracle` recibe el registro acumulado y decide si ya
//! satisface todos los campos requeridos por la función objetivo. Un valor
//! con forma incorrecta cuenta como "incompleto", nunca como error: un
//! parcial posterior puede corregirlo.

mod fn_oracle;
mod required_keys;

use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::PatientError;
use crate::merge::Fields;

pub use fn_oracle::{FnOracle, TryFnOracle};
pub use required_keys::RequiredKeys;

/// Trait para oráculos de completitud.
pub trait CompletenessOracle: Send + Sync + Debug {
    /// `Ok(true)` sólo si `candidate` puede entregarse a la función objetivo.
    ///
    /// Implementaciones deben ser totales y sin efectos secundarios.
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError>;

    /// Campos requeridos ausentes (o con forma inválida) en `candidate`.
    ///
    /// Por defecto vacío: no todos los oráculos saben enumerarlos.
    fn missing_fields(&self, _candidate: &Fields) -> Vec<String> {
        Vec::new()
    }
}

impl<O: CompletenessOracle + ?Sized> CompletenessOracle for Arc<O> {
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        (**self).is_complete(candidate)
    }

    fn missing_fields(&self, candidate: &Fields) -> Vec<String> {
        (**self).missing_fields(candidate)
    }
}
