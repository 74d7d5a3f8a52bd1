use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber de `tracing`. `RUST_LOG` tiene prioridad sobre
/// `default_level`. Llamarlo dos veces no es un error fatal.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
