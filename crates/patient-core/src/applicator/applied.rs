use serde_json::Value;

use super::Applicator;
use crate::errors::PatientError;

/// Resultado de `Applicator::apply`.
///
/// `Complete` lleva lo que devolvió la función objetivo (si ésta falla, su
/// `Result` llega aquí sin tocar). `Pending` lleva la siguiente continuación.
#[derive(Debug)]
pub enum Applied<R> {
    Complete(R),
    Pending(Applicator<R>),
}

impl<R> Applied<R> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Applied::Complete(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Applied::Pending(_))
    }

    /// Resultado de la función objetivo, si ya se ejecutó.
    pub fn complete(self) -> Option<R> {
        match self {
            Applied::Complete(r) => Some(r),
            Applied::Pending(_) => None,
        }
    }

    /// Continuación pendiente, si aún faltan campos.
    pub fn pending(self) -> Option<Applicator<R>> {
        match self {
            Applied::Pending(next) => Some(next),
            Applied::Complete(_) => None,
        }
    }

    /// Encadena otro parcial sobre una continuación pendiente.
    ///
    /// Sobre `Complete` devuelve `PatientError::AlreadyComplete`: el resultado
    /// ya fue producido y no hay aplicador que continuar.
    pub fn and_apply(self, partial: Value) -> Result<Applied<R>, PatientError> {
        match self {
            Applied::Pending(next) => next.apply(partial),
            Applied::Complete(_) => Err(PatientError::AlreadyComplete),
        }
    }
}
