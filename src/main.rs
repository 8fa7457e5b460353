// --- Panel de carga lectiva - Archivo principal ---

use cargalectiva::{run_server, Config};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    tracing::info!("=== Panel de carga lectiva (API) ===");
    let config = match Config::desde_entorno() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("❌ {}", e);
            return Err(std::io::Error::other(e));
        }
    };
    run_server(config).await
}
