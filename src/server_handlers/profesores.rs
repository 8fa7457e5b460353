use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::agregacion::{asignaciones_de, estado_carga, filtrar, EstadoCarga, Filtro};
use crate::carga::Cargador;
use crate::models::Profesor;

use super::listado;

#[derive(Serialize)]
struct ProfesorConEstado<'a> {
    #[serde(flatten)]
    profesor: &'a Profesor,
    estado: EstadoCarga,
    estado_texto: &'static str,
}

impl<'a> From<&'a Profesor> for ProfesorConEstado<'a> {
    fn from(profesor: &'a Profesor) -> Self {
        let estado = estado_carga(profesor);
        ProfesorConEstado { profesor, estado, estado_texto: estado.etiqueta() }
    }
}

/// GET /profesores?busqueda=&departamento=
pub async fn listar_handler(cargador: web::Data<Cargador>, filtro: web::Query<Filtro>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    let profesores: Vec<ProfesorConEstado> = filtrar(&datos.profesores, &filtro)
        .into_iter()
        .map(ProfesorConEstado::from)
        .collect();
    listado("profesores", &profesores, &datos)
}

/// GET /profesores/{abrev}/asignaciones
pub async fn asignaciones_handler(cargador: web::Data<Cargador>, abrev: web::Path<String>) -> impl Responder {
    let abrev = abrev.into_inner();
    let datos = cargador.cargar_todo().await;
    let Some(profesor) = datos.profesores.iter().find(|p| p.abrev == abrev) else {
        return HttpResponse::NotFound().json(json!({"error": format!("no existe el profesor '{}'", abrev)}));
    };
    let asignaciones = asignaciones_de(&abrev, &datos.asignaciones);
    HttpResponse::Ok().json(json!({
        "profesor": ProfesorConEstado::from(profesor),
        "total": asignaciones.len(),
        "asignaciones": asignaciones,
    }))
}
