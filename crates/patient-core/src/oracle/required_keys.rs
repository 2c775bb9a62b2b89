use super::CompletenessOracle;
use crate::errors::PatientError;
use crate::merge::Fields;

/// Oráculo mínimo: sólo comprueba presencia de claves, no su tipo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredKeys {
    keys: Vec<String>,
}

impl RequiredKeys {
    pub fn new<I, S>(keys: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { keys: keys.into_iter().map(Into::into).collect() }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl CompletenessOracle for RequiredKeys {
    fn is_complete(&self, candidate: &Fields) -> Result<bool, PatientError> {
        Ok(self.keys.iter().all(|k| candidate.contains_key(k)))
    }

    fn missing_fields(&self, candidate: &Fields) -> Vec<String> {
        self.keys.iter().filter(|k| !candidate.contains_key(k.as_str())).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_missing_keys_in_declaration_order() {
        let oracle = RequiredKeys::new(["c", "a", "b"]);
        let mut candidate = Fields::new();
        candidate.insert("a".into(), json!(1));

        assert_eq!(oracle.is_complete(&candidate), Ok(false));
        assert_eq!(oracle.missing_fields(&candidate), vec!["c".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_key_set_is_always_complete() {
        let oracle = RequiredKeys::new(Vec::<String>::new());
        assert_eq!(oracle.is_complete(&Fields::new()), Ok(true));
    }
}
