//! Configuración central de la aplicación demo.
//! Carga variables de entorno (.env) y las convierte en un `AppConfig`
//! inmutable. La librería (`patient-core`, `patient-schema`) no lee
//! configuración: sólo el binario y los tests la usan.
use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use log::LevelFilter;
use once_cell::sync::Lazy;

use crate::errors::CoreError;

/// Tope de `PATIENT_DEMO_EXCITEDNESS`: el demo repite `!` tantas veces.
pub const MAX_EXCITEDNESS: u64 = 100;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Nivel de log para el backend (`PATIENT_LOG_LEVEL`, por defecto `info`).
    pub log_level: LevelFilter,
    /// Esquema JSON alternativo para el demo (`PATIENT_SCHEMA_PATH`).
    pub schema_path: Option<PathBuf>,
    pub demo: DemoConfig,
}

/// Valores que el demo suministra campo a campo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub greeting: String,
    pub name: String,
    pub excitedness: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { greeting: "Hello".to_string(),
               name: "Claudio".to_string(),
               excitedness: 2 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_level: LevelFilter::Info,
               schema_path: None,
               demo: DemoConfig::default() }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno del proceso (tras cargar `.env`).
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = AppConfig::default();

        let log_level = match lookup("PATIENT_LOG_LEVEL") {
            Some(v) => v.parse::<LevelFilter>()
                        .map_err(|_| CoreError::Config(format!("PATIENT_LOG_LEVEL inválido: {v}")))?,
            None => defaults.log_level,
        };
        let excitedness = match lookup("PATIENT_DEMO_EXCITEDNESS") {
            Some(v) => v.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|n| *n <= MAX_EXCITEDNESS)
                        .ok_or_else(|| {
                            CoreError::Config(format!("PATIENT_DEMO_EXCITEDNESS debe ser entero en [0, {MAX_EXCITEDNESS}]: {v}"))
                        })?,
            None => defaults.demo.excitedness,
        };
        let demo = DemoConfig { greeting: lookup("PATIENT_DEMO_GREETING").unwrap_or(defaults.demo.greeting),
                                name: lookup("PATIENT_DEMO_NAME").unwrap_or(defaults.demo.name),
                                excitedness };
        let schema_path = lookup("PATIENT_SCHEMA_PATH").filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(AppConfig { log_level, schema_path, demo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = AppConfig::from_lookup(|_| None).expect("config");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PATIENT_LOG_LEVEL", "debug"),
                                                        ("PATIENT_DEMO_GREETING", "Hola"),
                                                        ("PATIENT_DEMO_NAME", "Ada"),
                                                        ("PATIENT_DEMO_EXCITEDNESS", " 3 "),
                                                        ("PATIENT_SCHEMA_PATH", "/tmp/s.json")])).expect("config");
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.demo, DemoConfig { greeting: "Hola".into(), name: "Ada".into(), excitedness: 3 });
        assert_eq!(cfg.schema_path, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn invalid_excitedness_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PATIENT_DEMO_EXCITEDNESS", "-1")])).expect_err("negative");
        assert!(matches!(err, CoreError::Config(_)), "{err}");
    }

    #[test]
    fn excitedness_above_the_cap_is_a_config_error() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PATIENT_DEMO_EXCITEDNESS", "100")])).expect("at the cap");
        assert_eq!(cfg.demo.excitedness, MAX_EXCITEDNESS);

        for raw in ["101".to_string(), u64::MAX.to_string()] {
            let err = AppConfig::from_lookup(lookup_from(&[("PATIENT_DEMO_EXCITEDNESS", raw.as_str())])).expect_err("too big");
            assert!(matches!(err, CoreError::Config(ref m) if m.contains("[0, 100]")), "{err}");
        }
    }

    #[test]
    fn invalid_log_level_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PATIENT_LOG_LEVEL", "loud")])).expect_err("level");
        assert!(err.to_string().contains("PATIENT_LOG_LEVEL"));
    }
}
