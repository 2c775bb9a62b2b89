//! Builder para `Applicator`.
//!
//! Permite compartir un oráculo ya envuelto en `Arc` entre varios
//! aplicadores y arrancar desde un acumulado distinto del vacío. A
//! diferencia de `Applicator::new`, la ausencia de oráculo o target se
//! detecta en `build` y se reporta como error.

use std::sync::Arc;

use serde_json::Value;

use super::{Applicator, SharedOracle, Target};
use crate::errors::PatientError;
use crate::merge::{merge_fields, value_kind, Fields};
use crate::oracle::CompletenessOracle;

pub struct ApplicatorBuilder<R> {
    seed: Fields,
    oracle: Option<SharedOracle>,
    target: Option<Target<R>>,
}

impl<R> ApplicatorBuilder<R> {
    pub fn new() -> Self {
        Self { seed: Fields::new(),
               oracle: None,
               target: None }
    }

    pub fn oracle<O>(self, oracle: O) -> Self
        where O: CompletenessOracle + 'static
    {
        self.shared_oracle(Arc::new(oracle))
    }

    /// Usa un oráculo ya compartido (p. ej. un `Schema` común a varias funciones).
    pub fn shared_oracle(mut self, oracle: SharedOracle) -> Self {
        self.oracle = Some(oracle);
        self
    }

    pub fn target<F>(mut self, target: F) -> Self
        where F: Fn(Fields) -> R + Send + Sync + 'static
    {
        self.target = Some(Arc::new(target));
        self
    }

    /// Acumulado inicial. Se fusiona sobre lo ya sembrado (gana `seed`).
    ///
    /// Sembrar no consulta al oráculo: la primera comprobación ocurre en el
    /// primer `apply`.
    pub fn seed(mut self, seed: Value) -> Result<Self, PatientError> {
        match seed {
            Value::Object(fields) => {
                self.seed = merge_fields(&self.seed, &fields);
                Ok(self)
            }
            other => Err(PatientError::PartialNotObject { found: value_kind(&other) }),
        }
    }

    pub fn build(self) -> Result<Applicator<R>, PatientError> {
        let oracle = self.oracle.ok_or(PatientError::MissingOracle)?;
        let target = self.target.ok_or(PatientError::MissingTarget)?;
        Ok(Applicator::from_parts(self.seed, oracle, target))
    }
}

impl<R> Default for ApplicatorBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
