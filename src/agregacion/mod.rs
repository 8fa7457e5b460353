//! Agregados sobre una carga ya terminada.
//!
//! Submódulos:
//! - `filtros`: búsqueda y filtros por departamento / turno / grupo
//! - `resumen`: estado de carga, resumen por departamento y estadísticas
//!
//! Todo es puro: recibe slices y devuelve valores nuevos.

pub mod filtros;
pub mod resumen;

pub use filtros::{filtrar, Buscable, Filtro};
pub use resumen::{
    estadisticas, estado_carga, opciones_filtro, resumen_departamentos, EstadoCarga, Estadisticas,
    OpcionesFiltro, ResumenDepartamento,
};

use std::collections::HashMap;

use crate::models::{Asignacion, Profesor};

/// Copia de `profesores` con `carga_actual` = suma de sesiones de las
/// asignaciones cuyo profesor coincide exactamente con la abreviatura.
pub fn con_carga_actual(profesores: &[Profesor], asignaciones: &[Asignacion]) -> Vec<Profesor> {
    let mut sesiones: HashMap<&str, u32> = HashMap::new();
    for a in asignaciones {
        let total = sesiones.entry(a.profesor.as_str()).or_insert(0);
        *total = total.saturating_add(a.sesiones);
    }
    profesores
        .iter()
        .map(|p| Profesor {
            carga_actual: sesiones.get(p.abrev.as_str()).copied().unwrap_or(0),
            ..p.clone()
        })
        .collect()
}

/// Asignaciones de un profesor, en el orden del fichero.
pub fn asignaciones_de<'a>(abrev: &str, asignaciones: &'a [Asignacion]) -> Vec<&'a Asignacion> {
    asignaciones.iter().filter(|a| a.profesor == abrev).collect()
}
