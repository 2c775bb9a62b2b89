use log::error;
use patient_rust::config::AppConfig;
use patient_rust::errors::CoreError;
use patient_rust::{demo, logging};

fn main() {
    if let Err(e) = run() {
        error!("main:failed err={e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CoreError> {
    // Cargar variables de entorno desde .env si existe
    let cfg = AppConfig::from_env()?;
    logging::init(cfg.log_level);

    for line in demo::run_demo(&cfg)? {
        println!("{line}");
    }
    Ok(())
}
