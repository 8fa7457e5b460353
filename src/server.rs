use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::carga::Cargador;
use crate::config::Config;
use crate::csv::esquema;
use crate::error::CargaError;
use crate::server_handlers::{catalogo, panel, profesores};

/// Rutas de la API; separado de `run_server` para poder montarlo en tests.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(panel::health_handler))
        .route("/profesores", web::get().to(profesores::listar_handler))
        .route(
            "/profesores/{abrev}/asignaciones",
            web::get().to(profesores::asignaciones_handler),
        )
        .route("/modulos", web::get().to(catalogo::modulos_handler))
        .route("/asignaturas", web::get().to(catalogo::asignaturas_handler))
        .route("/asignaturas/nombres", web::get().to(catalogo::nombres_handler))
        .route("/departamentos", web::get().to(panel::departamentos_handler))
        .route("/resumen", web::get().to(panel::resumen_handler))
        .route("/clasificacion/avisos", web::get().to(panel::avisos_handler));
}

/// Construye el cargador a partir de la configuración. Antes comprueba los
/// esquemas de columnas y registra los avisos de las políticas.
pub fn preparar_cargador(config: &Config) -> Result<Cargador, CargaError> {
    for e in esquema::TODOS {
        e.validar().map_err(CargaError::Config)?;
    }
    let cliente = config.cliente_http()?;
    let clasificadores = config.clasificadores()?;
    clasificadores.revisar();
    let cargador = Cargador::new(config.fuentes(&cliente), clasificadores).con_aviso(|entidad, error| {
        tracing::warn!(entidad, "⚠️  sin datos hasta la próxima carga: {}", error)
    });
    Ok(cargador)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let cargador = preparar_cargador(&config).map_err(std::io::Error::other)?;
    let datos = web::Data::new(cargador);
    tracing::info!(bind = %config.bind, "🚀 servidor en http://{}", config.bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(datos.clone())
            .configure(configurar)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
