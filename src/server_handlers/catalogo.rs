use actix_web::{web, Responder};

use crate::agregacion::{filtrar, Filtro};
use crate::carga::Cargador;

use super::listado;

/// GET /modulos?busqueda=&departamento=&turno=
pub async fn modulos_handler(cargador: web::Data<Cargador>, filtro: web::Query<Filtro>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    let modulos = filtrar(&datos.modulos, &filtro);
    listado("modulos", &modulos, &datos)
}

/// GET /asignaturas?busqueda=&departamento=&grupo=&turno=
pub async fn asignaturas_handler(cargador: web::Data<Cargador>, filtro: web::Query<Filtro>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    let asignaturas = filtrar(&datos.asignaturas, &filtro);
    listado("asignaturas", &asignaturas, &datos)
}

/// GET /asignaturas/nombres?busqueda=&departamento=
///
/// Catálogo NomAsg; lista vacía si no hay fuente configurada.
pub async fn nombres_handler(cargador: web::Data<Cargador>, filtro: web::Query<Filtro>) -> impl Responder {
    let datos = cargador.cargar_todo().await;
    let nombres = filtrar(&datos.nombres, &filtro);
    listado("nombres", &nombres, &datos)
}
