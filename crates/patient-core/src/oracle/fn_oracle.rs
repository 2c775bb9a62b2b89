use std::fmt;

use super::CompletenessOracle;
use crate::errors::PatientError;
use crate::merge::Fields;

/// Adaptador para usar cualquier predicado `Fn(&Fields) -> bool` como oráculo.
pub struct FnOracle<F> {
    name: &'static str,
    predicate: F,
}

impl<F> FnOracle<F> where F: Fn(&Fields) -> bool + Send + Sync
{
    pub fn new(predicate: F) -> Self {
        Self::named("fn", predicate)
    }

    /// Igual que `new` pero con un nombre visible en `Debug` y en los logs.
    pub fn named(name: &'static str, predicate: F) -> Self {
        Self { name, predicate }
    }
}

impl<F> fmt::Debug for FnOracle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOracle").field("name", &self.name).finish()
    }
}

impl<F> CompletenessOracle for FnOracle<F> where F: Fn(&Fields) -> bool + Send + Sync
{
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        Ok((self.predicate)(candidate))
    }
}

/// Oráculo a partir de un predicado que puede fallar.
///
/// El error se propaga tal cual desde `Applicator::apply`; el aplicador no
/// intenta recuperarse.
pub struct TryFnOracle<F> {
    name: &'static str,
    predicate: F,
}

impl<F> TryFnOracle<F> where F: Fn(&Fields) -> Result<bool, PatientError> + Send + Sync
{
    pub fn new(predicate: F) -> Self {
        Self::named("try_fn", predicate)
    }

    pub fn named(name: &'static str, predicate: F) -> Self {
        Self { name, predicate }
    }
}

impl<F> fmt::Debug for TryFnOracle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFnOracle").field("name", &self.name).finish()
    }
}

impl<F> CompletenessOracle for TryFnOracle<F> where F: Fn(&Fields) -> Result<bool, PatientError> + Send + Sync
{
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        (self.predicate)(candidate)
    }
}
