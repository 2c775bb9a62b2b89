//! Capa opcional de tipado fuerte sobre el aplicador neutro.
//!
//! El registro acumulado sigue siendo un `Fields` dinámico; un
//! `DeserializeOracle<I>` lo declara completo cuando serde puede construir
//! un `I` a partir de él. Campos opcionales se modelan con `Option<_>` o
//! `#[serde(default)]`; claves desconocidas se toleran salvo que el tipo use
//! `deny_unknown_fields`, y un tipo que quiera recibirlas usa
//! `#[serde(flatten)]`.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::applicator::Applicator;
use crate::errors::PatientError;
use crate::merge::Fields;
use crate::oracle::CompletenessOracle;

/// Oráculo derivado de un tipo deserializable: completo si `I` se puede
/// construir desde el acumulado. Un campo con tipo incorrecto cuenta como
/// incompleto.
pub struct DeserializeOracle<I> {
    _input: PhantomData<fn() -> I>,
}

impl<I: DeserializeOwned> DeserializeOracle<I> {
    pub fn new() -> Self {
        Self { _input: PhantomData }
    }

    /// Intenta construir `I` desde `candidate`.
    pub fn decode(candidate: &Fields) -> Result<I, serde_json::Error> {
        serde_json::from_value(Value::Object(candidate.clone()))
    }
}

impl<I: DeserializeOwned> Default for DeserializeOracle<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for DeserializeOracle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializeOracle").field("input", &type_name::<I>()).finish()
    }
}

impl<I: DeserializeOwned> CompletenessOracle for DeserializeOracle<I> {
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        Ok(Self::decode(candidate).is_ok())
    }
}

/// Versión tipada de `make_patient`: el target recibe `I` ya deserializado.
///
/// El resultado es `Result<R, serde_json::Error>` porque el oráculo y la
/// decodificación final son dos deserializaciones independientes; con el
/// mismo registro ambas coinciden, así que el `Err` sólo aparece si `I`
/// tiene un `Deserialize` no determinista.
pub fn make_patient_typed<I, R, F>(f: F) -> Applicator<Result<R, serde_json::Error>>
    where I: DeserializeOwned + 'static,
          R: 'static,
          F: Fn(I) -> R + Send + Sync + 'static
{
    Applicator::new(DeserializeOracle::<I>::new(), move |fields: Fields| {
        serde_json::from_value::<I>(Value::Object(fields)).map(&f)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Point {
        x: i64,
        y: i64,
        #[serde(default)]
        label: Option<String>,
    }

    #[test]
    fn decode_failure_means_incomplete() {
        let oracle = DeserializeOracle::<Point>::new();
        let mut candidate = Fields::new();
        candidate.insert("x".into(), json!(1));
        assert_eq!(oracle.is_complete(&candidate), Ok(false));

        candidate.insert("y".into(), json!("not a number"));
        assert_eq!(oracle.is_complete(&candidate), Ok(false));

        candidate.insert("y".into(), json!(2));
        assert_eq!(oracle.is_complete(&candidate), Ok(true));
    }

    #[test]
    fn typed_patient_receives_decoded_input() {
        let p = make_patient_typed(|pt: Point| format!("{}:{}:{}", pt.x, pt.y, pt.label.unwrap_or_default()));
        let step = p.apply(json!({"label": "p"})).expect("label");
        let out = step.and_apply(json!({"y": 2, "x": 1})).expect("coords").complete().expect("complete");
        assert_eq!(out.expect("decode"), "1:2:p");
    }

    #[test]
    fn debug_names_input_type() {
        let s = format!("{:?}", DeserializeOracle::<Point>::new());
        assert!(s.contains("Point"), "{s}");
    }
}
