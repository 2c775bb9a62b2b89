use patient_core::PatientError;
use thiserror::Error;

use super::domain_error::DomainError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de esquema: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("Error del aplicador: {0}")]
    Patient(#[from] PatientError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
