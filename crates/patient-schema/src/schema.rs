//! Esquema declarativo de campos usado como oráculo de completitud.
//!
//! Un `Schema` distingue campos requeridos y opcionales. El registro es
//! completo cuando todos los requeridos están presentes con la forma
//! correcta y ningún opcional presente tiene forma incorrecta. Claves que el
//! esquema no declara se ignoran.

use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use patient_core::{CompletenessOracle, Fields, PatientError};

use crate::FieldType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    required: IndexMap<String, FieldType>,
    #[serde(default)]
    optional: IndexMap<String, FieldType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carga un esquema desde JSON: `{"required": {...}, "optional": {...}}`.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let schema: Schema = serde_json::from_str(source)?;
        Ok(schema.normalized())
    }

    /// Declara un campo requerido. Si ya era opcional deja de serlo.
    pub fn required(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        self.optional.shift_remove(&name);
        self.required.insert(name, ty);
        self
    }

    /// Declara un campo opcional. Un campo ya requerido se mantiene requerido.
    pub fn optional(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        let name = name.into();
        if !self.required.contains_key(&name) {
            self.optional.insert(name, ty);
        }
        self
    }

    /// Intersección de esquemas: el registro debe satisfacer ambos. Un
    /// campo requerido en cualquiera de los dos queda requerido; ante tipos
    /// distintos para el mismo campo gana `other`.
    pub fn intersect(self, other: Schema) -> Self {
        let mut out = self;
        for (name, ty) in other.required {
            out = out.required(name, ty);
        }
        for (name, ty) in other.optional {
            out = out.optional(name, ty);
        }
        out
    }

    pub fn required_fields(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.required.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.optional.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn normalized(self) -> Self {
        let Schema { required, optional } = self;
        let mut out = Schema { required, optional: IndexMap::new() };
        for (name, ty) in optional {
            out = out.optional(name, ty);
        }
        out
    }

    fn required_ok(name: &str, ty: &FieldType, candidate: &Fields) -> bool {
        match candidate.get(name) {
            Some(v) if ty.matches(v) => true,
            Some(v) => {
                trace!("schema:mismatch field={name} expected={ty} found={}", patient_core::merge::value_kind(v));
                false
            }
            None => false,
        }
    }

    // Un opcional en `null` cuenta como ausente.
    fn optional_ok(name: &str, ty: &FieldType, candidate: &Fields) -> bool {
        match candidate.get(name) {
            None | Some(Value::Null) => true,
            Some(v) if ty.matches(v) => true,
            Some(v) => {
                trace!("schema:mismatch field={name} expected={ty} found={}", patient_core::merge::value_kind(v));
                false
            }
        }
    }
}

impl CompletenessOracle for Schema {
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        let complete = self.required.iter().all(|(k, ty)| Self::required_ok(k, ty, candidate))
                       && self.optional.iter().all(|(k, ty)| Self::optional_ok(k, ty, candidate));
        Ok(complete)
    }

    /// Requeridos ausentes o mal formados y opcionales mal formados, en
    /// orden de declaración.
    fn missing_fields(&self, candidate: &Fields) -> Vec<String> {
        let required = self.required.iter().filter(|(k, ty)| !Self::required_ok(k, ty, candidate));
        let optional = self.optional.iter().filter(|(k, ty)| !Self::optional_ok(k, ty, candidate));
        required.chain(optional).map(|(k, _)| k.clone()).collect()
    }
}
