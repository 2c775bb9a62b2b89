//! Inicialización del backend de logs (`env_logger`).
//!
//! Las librerías sólo usan la fachada `log`; el binario decide el backend.
//! `RUST_LOG` sigue teniendo prioridad sobre el nivel configurado.

use log::LevelFilter;

/// Instala `env_logger` con `level` como filtro base. Devuelve `false` si ya
/// había un logger global instalado (p. ej. en tests).
pub fn init(level: LevelFilter) -> bool {
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .format_timestamp_millis()
                              .try_init()
                              .is_ok()
}
