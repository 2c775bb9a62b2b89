//! Aplicador incremental ("patient function").
//!
//! Cada `apply` fusiona un parcial sobre el registro acumulado, consulta al
//! oráculo y devuelve el resultado de la función objetivo o un nuevo
//! `Applicator` con el acumulado extendido.
//!
//! Ninguna instancia se muta tras su creación, así que un aplicador
//! intermedio puede continuarse varias veces y cada continuación es una rama
//! independiente.
//!
//! ```ignore
//! let greet = make_patient(RequiredKeys::new(["greeting", "name"]), |f: Fields| {
//!     format!("{} {}", f["greeting"].as_str().unwrap_or(""), f["name"].as_str().unwrap_or(""))
//! });
//! let step = greet.apply(json!({"name": "Claudio"}))?;
//! let done = step.and_apply(json!({"greeting": "Hello"}))?;
//! assert_eq!(done.complete().as_deref(), Some("Hello Claudio"));
//! ```

mod applied;
mod builder;

use std::fmt;
use std::sync::Arc;

use log::{debug, log_enabled, trace, warn, Level};
use serde_json::Value;

use crate::errors::PatientError;
use crate::merge::{merge_fields, value_kind, Fields};
use crate::oracle::CompletenessOracle;

pub use applied::Applied;
pub use builder::ApplicatorBuilder;

/// Función objetivo compartida entre todas las continuaciones de un aplicador.
pub type Target<R> = Arc<dyn Fn(Fields) -> R + Send + Sync>;

/// Oráculo compartido entre todas las continuaciones de un aplicador.
pub type SharedOracle = Arc<dyn CompletenessOracle>;

/// Par inmutable (registro acumulado, oráculo, función objetivo).
pub struct Applicator<R> {
    accumulated: Fields,
    oracle: SharedOracle,
    target: Target<R>,
}

/// Crea un aplicador con acumulado vacío. Equivale a `Applicator::new`.
pub fn make_patient<R, O, F>(oracle: O, target: F) -> Applicator<R>
    where O: CompletenessOracle + 'static,
          F: Fn(Fields) -> R + Send + Sync + 'static
{
    Applicator::new(oracle, target)
}

impl<R> Applicator<R> {
    /// Crea un aplicador con acumulado vacío.
    pub fn new<O, F>(oracle: O, target: F) -> Self
        where O: CompletenessOracle + 'static,
              F: Fn(Fields) -> R + Send + Sync + 'static
    {
        Self::from_parts(Fields::new(), Arc::new(oracle), Arc::new(target))
    }

    /// Builder con oráculo/target compartidos y acumulado inicial opcional.
    pub fn builder() -> ApplicatorBuilder<R> {
        ApplicatorBuilder::new()
    }

    pub(crate) fn from_parts(accumulated: Fields, oracle: SharedOracle, target: Target<R>) -> Self {
        Self { accumulated, oracle, target }
    }

    /// Registro acumulado hasta ahora.
    pub fn accumulated(&self) -> &Fields {
        &self.accumulated
    }

    /// Campos que el oráculo aún considera pendientes para el acumulado actual.
    pub fn missing_fields(&self) -> Vec<String> {
        self.oracle.missing_fields(&self.accumulated)
    }

    /// Aplica un parcial expresado como `Value`; debe ser un objeto JSON.
    pub fn apply(&self, partial: Value) -> Result<Applied<R>, PatientError> {
        match partial {
            Value::Object(fields) => self.apply_fields(fields),
            other => Err(PatientError::PartialNotObject { found: value_kind(&other) }),
        }
    }

    /// Fusiona `partial` sobre el acumulado (gana `partial`) y, si el oráculo
    /// lo acepta, ejecuta la función objetivo con el registro completo.
    ///
    /// `self` no se consume: volver a aplicar sobre un acumulado ya completo
    /// re-ejecuta la función objetivo.
    pub fn apply_fields(&self, partial: Fields) -> Result<Applied<R>, PatientError> {
        trace!("apply:start accumulated={} partial_keys={:?}",
               self.accumulated.len(),
               partial.keys().collect::<Vec<_>>());

        let merged = merge_fields(&self.accumulated, &partial);

        let complete = match self.oracle.is_complete(&merged) {
            Ok(c) => c,
            Err(e) => {
                warn!("apply:oracle error oracle={:?} err={}", self.oracle, e);
                return Err(e);
            }
        };
        if complete {
            debug!("apply:complete fields={}", merged.len());
            return Ok(Applied::Complete((self.target)(merged)));
        }

        if log_enabled!(Level::Debug) {
            debug!("apply:pending fields={} missing={:?}",
                   merged.len(),
                   self.oracle.missing_fields(&merged));
        }
        Ok(Applied::Pending(Self::from_parts(merged, Arc::clone(&self.oracle), Arc::clone(&self.target))))
    }
}

// Manual: derive exigiría `R: Clone` aunque sólo se clonan `Arc`s.
impl<R> Clone for Applicator<R> {
    fn clone(&self) -> Self {
        Self::from_parts(self.accumulated.clone(), Arc::clone(&self.oracle), Arc::clone(&self.target))
    }
}

impl<R> fmt::Debug for Applicator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Applicator")
         .field("accumulated", &self.accumulated)
         .field("oracle", &self.oracle)
         .finish_non_exhaustive()
    }
}
