//! Vistas agregadas para las tarjetas y tablas del panel.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::carga::ConjuntoDatos;
use crate::clasificacion::{ModoCoincidencia, DEPARTAMENTOS_OFICIALES};
use crate::models::{Profesor, Turno};

/// Situación de un profesor respecto a su horquilla de horas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoCarga {
    Sobrecargado,
    Subcargado,
    CercaDelLimite,
    Balanceado,
}

impl EstadoCarga {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            EstadoCarga::Sobrecargado => "Sobrecargado",
            EstadoCarga::Subcargado => "Subcargado",
            EstadoCarga::CercaDelLimite => "Cerca del límite",
            EstadoCarga::Balanceado => "Balanceado",
        }
    }
}

/// Por encima del máximo, por debajo del mínimo, por encima del 90 % del
/// máximo, o balanceado; en ese orden.
pub fn estado_carga(profesor: &Profesor) -> EstadoCarga {
    let carga = profesor.carga_actual;
    if carga > profesor.max_horas {
        EstadoCarga::Sobrecargado
    } else if carga < profesor.min_horas {
        EstadoCarga::Subcargado
    } else if profesor.max_horas > 0 && u64::from(carga) * 10 > u64::from(profesor.max_horas) * 9 {
        EstadoCarga::CercaDelLimite
    } else {
        EstadoCarga::Balanceado
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumenDepartamento {
    pub nombre: String,
    pub profesores: usize,
    pub carga_total: u32,
    pub horas_maximas: u32,
    pub modulos: usize,
    pub asignaturas: usize,
}

/// Una fila por departamento oficial, en el orden oficial. Los
/// departamentos sin datos aparecen con ceros.
pub fn resumen_departamentos(datos: &ConjuntoDatos) -> Vec<ResumenDepartamento> {
    DEPARTAMENTOS_OFICIALES
        .iter()
        .map(|&nombre| {
            let profesores: Vec<&Profesor> =
                datos.profesores.iter().filter(|p| p.departamento == nombre).collect();
            ResumenDepartamento {
                nombre: nombre.to_string(),
                profesores: profesores.len(),
                carga_total: profesores.iter().fold(0u32, |t, p| t.saturating_add(p.carga_actual)),
                horas_maximas: profesores.iter().fold(0u32, |t, p| t.saturating_add(p.max_horas)),
                modulos: datos.modulos.iter().filter(|m| m.departamento == nombre).count(),
                asignaturas: datos.asignaturas.iter().filter(|a| a.departamento == nombre).count(),
            }
        })
        .collect()
}

/// Cifras de las tarjetas de inicio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estadisticas {
    /// Departamentos con al menos un profesor o un módulo
    pub departamentos: usize,
    /// Familias distintas entre los códigos de grupo de los módulos (IFC, ADG…)
    pub ciclos_formativos: usize,
    pub modulos: usize,
    /// Asignaturas con profesor asignado
    pub modulos_asignados: usize,
    pub asignaturas: usize,
    pub total_profesores: usize,
    pub asignaciones: usize,
    pub sesiones_totales: u32,
}

pub fn estadisticas(datos: &ConjuntoDatos) -> Estadisticas {
    let departamentos = DEPARTAMENTOS_OFICIALES
        .iter()
        .filter(|&&d| {
            datos.profesores.iter().any(|p| p.departamento == d)
                || datos.modulos.iter().any(|m| m.departamento == d)
        })
        .count();
    let ciclos: BTreeSet<String> = datos
        .modulos
        .iter()
        .map(|m| ModoCoincidencia::SoloLetras.normalizar(&m.codigo_grupo))
        .filter(|c| !c.is_empty())
        .collect();

    Estadisticas {
        departamentos,
        ciclos_formativos: ciclos.len(),
        modulos: datos.modulos.len(),
        modulos_asignados: datos.asignaturas.iter().filter(|a| !a.profesor.is_empty()).count(),
        asignaturas: datos.asignaturas.len(),
        total_profesores: datos.profesores.len(),
        asignaciones: datos.asignaciones.len(),
        sesiones_totales: datos.asignaciones.iter().fold(0u32, |t, a| t.saturating_add(a.sesiones)),
    }
}

/// Valores de los desplegables de filtro.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpcionesFiltro {
    /// En el orden oficial, sólo los que aparecen en los datos
    pub departamentos: Vec<String>,
    /// Ordenados por código (M, N, T, V)
    pub turnos: Vec<Turno>,
    pub grupos: Vec<String>,
}

pub fn opciones_filtro(datos: &ConjuntoDatos) -> OpcionesFiltro {
    let presentes: BTreeSet<&str> = datos
        .profesores
        .iter()
        .map(|p| p.departamento.as_str())
        .chain(datos.modulos.iter().map(|m| m.departamento.as_str()))
        .chain(datos.asignaturas.iter().map(|a| a.departamento.as_str()))
        .collect();
    let mut departamentos: Vec<String> = DEPARTAMENTOS_OFICIALES
        .iter()
        .filter(|d| presentes.contains(*d))
        .map(|d| d.to_string())
        .collect();
    // etiquetas de políticas personalizadas, al final y ordenadas
    departamentos.extend(
        presentes
            .iter()
            .filter(|d| !DEPARTAMENTOS_OFICIALES.contains(*d))
            .map(|d| d.to_string()),
    );

    let mut turnos: Vec<Turno> = datos
        .modulos
        .iter()
        .filter_map(|m| m.turno)
        .chain(datos.asignaturas.iter().filter_map(|a| a.turno))
        .collect::<BTreeSet<Turno>>()
        .into_iter()
        .collect();
    turnos.sort_by_key(|t| t.codigo());
    let grupos: BTreeSet<&str> = datos
        .modulos
        .iter()
        .map(|m| m.codigo_grupo.as_str())
        .chain(datos.asignaturas.iter().map(|a| a.codigo_grupo.as_str()))
        .filter(|g| !g.is_empty())
        .collect();

    OpcionesFiltro {
        departamentos,
        turnos,
        grupos: grupos.into_iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agregacion::fixtures::*;

    fn datos() -> ConjuntoDatos {
        let mut d = ConjuntoDatos::vacio();
        d.profesores = vec![
            profesor("ING01", "Inglés", 20, 10, 25),
            profesor("ING02", "Inglés", 20, 10, 5),
            profesor("MM02", "Fabricación mecánica", 20, 10, 19),
            profesor("AE01", "Administración y gestión", 20, 10, 15),
        ];
        d.modulos = vec![
            modulo("1IFC31", "Desarrollo web", "Informática y comunicaciones", Some(Turno::Manana)),
            modulo("2IFC31", "Desarrollo web", "Informática y comunicaciones", Some(Turno::Tarde)),
            modulo("1ADG", "Gestión", "Administración y gestión", None),
        ];
        d.asignaturas = vec![
            asignatura("Bases de datos", "1IFC31", "INF02", "Informática y comunicaciones", Some(Turno::Nocturno)),
            asignatura("Contabilidad", "1ADG", "", "Administración y gestión", None),
        ];
        d.asignaciones = vec![asignacion("ING01", 3), asignacion("ING01", 4)];
        d
    }

    #[test]
    fn estados_de_carga() {
        assert_eq!(estado_carga(&profesor("A", "", 20, 10, 21)), EstadoCarga::Sobrecargado);
        assert_eq!(estado_carga(&profesor("A", "", 20, 10, 9)), EstadoCarga::Subcargado);
        assert_eq!(estado_carga(&profesor("A", "", 20, 10, 19)), EstadoCarga::CercaDelLimite);
        assert_eq!(estado_carga(&profesor("A", "", 20, 10, 18)), EstadoCarga::Balanceado);
        assert_eq!(estado_carga(&profesor("A", "", 20, 10, 20)), EstadoCarga::CercaDelLimite);
        assert_eq!(estado_carga(&profesor("A", "", 0, 0, 0)), EstadoCarga::Balanceado);
        assert_eq!(EstadoCarga::CercaDelLimite.etiqueta(), "Cerca del límite");
    }

    #[test]
    fn resumen_por_departamento_oficial() {
        let r = resumen_departamentos(&datos());
        assert_eq!(r.len(), DEPARTAMENTOS_OFICIALES.len());
        let ingles = r.iter().find(|d| d.nombre == "Inglés").unwrap();
        assert_eq!((ingles.profesores, ingles.carga_total, ingles.horas_maximas), (2, 30, 40));
        let inf = r.iter().find(|d| d.nombre == "Informática y comunicaciones").unwrap();
        assert_eq!((inf.profesores, inf.modulos, inf.asignaturas), (0, 2, 1));
        let quimica = r.iter().find(|d| d.nombre == "Química").unwrap();
        assert_eq!((quimica.profesores, quimica.modulos), (0, 0));
    }

    #[test]
    fn estadisticas_del_panel() {
        let e = estadisticas(&datos());
        assert_eq!(e.departamentos, 4);
        assert_eq!(e.ciclos_formativos, 2);
        assert_eq!(e.modulos, 3);
        assert_eq!(e.modulos_asignados, 1);
        assert_eq!(e.total_profesores, 4);
        assert_eq!(e.sesiones_totales, 7);
    }

    #[test]
    fn opciones_en_orden() {
        let o = opciones_filtro(&datos());
        assert_eq!(
            o.departamentos,
            vec![
                "Administración y gestión",
                "Fabricación mecánica",
                "Informática y comunicaciones",
                "Inglés"
            ]
        );
        assert_eq!(o.turnos, vec![Turno::Manana, Turno::Nocturno, Turno::Tarde]);
        assert_eq!(o.grupos, vec!["1ADG", "1IFC31", "2IFC31"]);
    }

    #[test]
    fn turnos_por_codigo() {
        let mut d = ConjuntoDatos::vacio();
        d.modulos = vec![
            modulo("1A", "a", "Inglés", Some(Turno::Vespertino)),
            modulo("1B", "b", "Inglés", Some(Turno::Tarde)),
            modulo("1C", "c", "Inglés", Some(Turno::Nocturno)),
            modulo("1D", "d", "Inglés", Some(Turno::Manana)),
            modulo("1E", "e", "Inglés", Some(Turno::Tarde)),
        ];
        let codigos: Vec<&str> = opciones_filtro(&d).turnos.iter().map(Turno::codigo).collect();
        assert_eq!(codigos, vec!["M", "N", "T", "V"]);
    }
}
