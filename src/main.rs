// --- Seguimiento de malla curricular - Archivo principal ---

use mallaplan::config::{PlanRules, ServerConfig};
use mallaplan::{malla, run_server, telemetry, Curriculum};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    telemetry::init(&config.log_level);

    let loaded = match &config.malla_path {
        Some(path) => malla::load_from_path(path).and_then(|subjects| Curriculum::new(subjects, PlanRules::default())),
        None => Curriculum::builtin(),
    };
    let curriculum = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "malla inválida, no se inicia el servidor");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    info!("Iniciando servidor en http://{}", config.bind_addr);
    run_server(&config.bind_addr, curriculum).await
}
