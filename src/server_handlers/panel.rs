use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::agregacion::{estadisticas, opciones_filtro, resumen_departamentos};
use crate::carga::Cargador;

pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// GET /departamentos
pub async fn departamentos_handler(cargador: web::Data<Cargador>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    HttpResponse::Ok().json(json!({
        "departamentos": resumen_departamentos(&datos),
        "cargado_en": datos.cargado_en,
        "fallos": datos.fallos,
    }))
}

/// GET /resumen
/// Cifras de las tarjetas de inicio y valores para los desplegables.
pub async fn resumen_handler(cargador: web::Data<Cargador>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    HttpResponse::Ok().json(json!({
        "estadisticas": estadisticas(&datos),
        "opciones": opciones_filtro(&datos),
        "cargado_en": datos.cargado_en,
        "fallos": datos.fallos,
    }))
}

/// GET /clasificacion/avisos
pub async fn avisos_handler(cargador: web::Data<Cargador>) -> impl Responder {
    let clasificadores = cargador.clasificadores();
    HttpResponse::Ok().json(json!({
        "profesores": clasificadores.profesores.avisos(),
        "grupos": clasificadores.grupos.avisos(),
    }))
}
