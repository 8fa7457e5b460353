pub mod catalogo;
pub mod panel;
pub mod profesores;

use actix_web::HttpResponse;
use serde_json::json;

use crate::carga::ConjuntoDatos;

/// Respuesta estándar de listado: los elementos más el contexto de la carga.
pub(crate) fn listado<T: serde::Serialize>(clave: &str, elementos: &[T], datos: &ConjuntoDatos) -> HttpResponse {
    let mut cuerpo = json!({
        "total": elementos.len(),
        "cargado_en": datos.cargado_en,
        "fallos": datos.fallos,
    });
    cuerpo[clave] = json!(elementos);
    HttpResponse::Ok().json(cuerpo)
}
