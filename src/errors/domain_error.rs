use thiserror::Error;

/// Errores del dominio del demo: entradas que el aplicador acepta
/// mecánicamente pero que no llevan a un saludo.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Registro incompleto, faltan: {}", .0.join(", "))]
    Incomplete(Vec<String>),
    #[error("Validación fallida: {0}")]
    Validation(String),
}
