//! Errores del aplicador incremental.
//!
//! Los fallos de la función objetivo no aparecen aquí: forman parte de su
//! propio tipo de retorno y llegan al llamador sin envolver.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PatientError {
    #[error("completeness oracle failed: {0}")] Oracle(String),
    #[error("partial must be a JSON object, found {found}")] PartialNotObject { found: &'static str },
    #[error("applicator already produced a result")] AlreadyComplete,
    #[error("builder has no completeness oracle")] MissingOracle,
    #[error("builder has no target function")] MissingTarget,
}
