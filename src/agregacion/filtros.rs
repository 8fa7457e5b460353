//! Filtros de los listados del panel.
//!
//! Todas las dimensiones activas se combinan con AND. `busqueda` es una
//! subcadena sin distinguir mayúsculas sobre los campos buscables de cada
//! entidad; departamento, turno y grupo son coincidencias exactas. Una
//! dimensión que la entidad no tiene (turno en profesores) no filtra.

use serde::Deserialize;

use crate::models::{Asignatura, Modulo, NombreAsignatura, Profesor, Turno};

/// Valor que en los desplegables significa "todos".
pub const TODOS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Filtro {
    pub busqueda: Option<String>,
    pub departamento: Option<String>,
    pub turno: Option<String>,
    pub grupo: Option<String>,
}

impl Filtro {
    /// Quita los valores vacíos o "all", y traduce el turno a su código.
    pub fn normalizado(&self) -> Filtro {
        fn activo(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(TODOS))
                .map(str::to_string)
        }
        Filtro {
            busqueda: activo(&self.busqueda).map(|s| s.to_lowercase()),
            departamento: activo(&self.departamento),
            turno: activo(&self.turno).map(|t| match Turno::desde_codigo(&t) {
                Some(turno) => turno.codigo().to_string(),
                None => t,
            }),
            grupo: activo(&self.grupo),
        }
    }

    pub fn es_vacio(&self) -> bool {
        let n = self.normalizado();
        n.busqueda.is_none() && n.departamento.is_none() && n.turno.is_none() && n.grupo.is_none()
    }

    /// Espera un filtro ya normalizado.
    fn acepta<T: Buscable>(&self, elemento: &T) -> bool {
        // Filtro 1: búsqueda libre
        if let Some(ref q) = self.busqueda {
            if !elemento.campos_buscables().iter().any(|c| c.to_lowercase().contains(q.as_str())) {
                return false;
            }
        }
        // Filtro 2: departamento
        if let Some(ref d) = self.departamento {
            if elemento.departamento() != d {
                return false;
            }
        }
        // Filtro 3: turno
        if let Some(ref t) = self.turno {
            if let Some(turno) = elemento.turno() {
                if turno.map(|x| x.codigo()) != Some(t.as_str()) {
                    return false;
                }
            }
        }
        // Filtro 4: código de grupo
        if let Some(ref g) = self.grupo {
            if let Some(grupo) = elemento.grupo() {
                if grupo != g {
                    return false;
                }
            }
        }
        true
    }
}

/// Entidad que se puede listar con un `Filtro`.
pub trait Buscable {
    fn campos_buscables(&self) -> Vec<&str>;
    fn departamento(&self) -> &str;

    /// `None` si la entidad no tiene turno; `Some(None)` si lo tiene vacío.
    fn turno(&self) -> Option<Option<Turno>> {
        None
    }

    /// `None` si la entidad no tiene código de grupo.
    fn grupo(&self) -> Option<&str> {
        None
    }
}

impl Buscable for Profesor {
    fn campos_buscables(&self) -> Vec<&str> {
        vec![self.abrev.as_str(), self.departamento.as_str(), self.email.as_str()]
    }

    fn departamento(&self) -> &str {
        &self.departamento
    }
}

impl Buscable for Modulo {
    fn campos_buscables(&self) -> Vec<&str> {
        vec![self.codigo_grupo.as_str(), self.descripcion.as_str(), self.departamento.as_str()]
    }

    fn departamento(&self) -> &str {
        &self.departamento
    }

    fn turno(&self) -> Option<Option<Turno>> {
        Some(self.turno)
    }

    fn grupo(&self) -> Option<&str> {
        Some(&self.codigo_grupo)
    }
}

impl Buscable for Asignatura {
    fn campos_buscables(&self) -> Vec<&str> {
        vec![
            self.nombre.as_str(),
            self.codigo.as_str(),
            self.codigo_grupo.as_str(),
            self.profesor.as_str(),
            self.departamento.as_str(),
        ]
    }

    fn departamento(&self) -> &str {
        &self.departamento
    }

    fn turno(&self) -> Option<Option<Turno>> {
        Some(self.turno)
    }

    fn grupo(&self) -> Option<&str> {
        Some(&self.codigo_grupo)
    }
}

impl Buscable for NombreAsignatura {
    fn campos_buscables(&self) -> Vec<&str> {
        vec![self.codigo.as_str(), self.nombre.as_str()]
    }

    fn departamento(&self) -> &str {
        &self.departamento
    }
}

/// Elementos que pasan todos los filtros activos, en el orden original.
pub fn filtrar<'a, T: Buscable>(elementos: &'a [T], filtro: &Filtro) -> Vec<&'a T> {
    let filtro = filtro.normalizado();
    elementos.iter().filter(|e| filtro.acepta(*e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agregacion::fixtures::*;

    fn filtro(busqueda: &str, departamento: &str, turno: &str, grupo: &str) -> Filtro {
        let f = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };
        Filtro {
            busqueda: f(busqueda),
            departamento: f(departamento),
            turno: f(turno),
            grupo: f(grupo),
        }
    }

    #[test]
    fn busqueda_sin_mayusculas_en_profesores() {
        let v = vec![
            profesor("ING01", "Inglés", 20, 10, 0),
            profesor("MM02", "Fabricación mecánica", 20, 10, 0),
        ];
        assert_eq!(filtrar(&v, &filtro("ing", "", "", "")).len(), 1);
        assert_eq!(filtrar(&v, &filtro("MECÁ", "", "", "")).len(), 1);
        assert_eq!(filtrar(&v, &filtro("@centro", "", "", "")).len(), 2);
        assert_eq!(filtrar(&v, &filtro("", "", "", "")).len(), 2);
    }

    #[test]
    fn departamento_exacto_y_all() {
        let v = vec![
            profesor("ING01", "Inglés", 20, 10, 0),
            profesor("MM02", "Fabricación mecánica", 20, 10, 0),
        ];
        assert_eq!(filtrar(&v, &filtro("", "Inglés", "", "")).len(), 1);
        assert!(filtrar(&v, &filtro("", "Ingl", "", "")).is_empty());
        assert_eq!(filtrar(&v, &filtro("", "all", "", "")).len(), 2);
    }

    #[test]
    fn turno_no_filtra_profesores() {
        let v = vec![profesor("ING01", "Inglés", 20, 10, 0)];
        assert_eq!(filtrar(&v, &filtro("", "", "T", "1IFC")).len(), 1);
    }

    #[test]
    fn modulos_por_turno_y_busqueda() {
        let v = vec![
            modulo("1IFC31", "Desarrollo web", "Informática y comunicaciones", Some(Turno::Manana)),
            modulo("2ADG", "Gestión administrativa", "Administración y gestión", Some(Turno::Tarde)),
            modulo("1QUI", "Laboratorio", "Química", None),
        ];
        assert_eq!(filtrar(&v, &filtro("", "", "M", "")).len(), 1);
        assert_eq!(filtrar(&v, &filtro("", "", "t", "")).len(), 1);
        assert_eq!(filtrar(&v, &filtro("", "", "all", "")).len(), 3);
        let r = filtrar(&v, &filtro("gestión", "", "", ""));
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].codigo_grupo, "2ADG");
        assert_eq!(filtrar(&v, &filtro("", "", "", "1QUI")).len(), 1);
    }

    #[test]
    fn asignaturas_combinan_con_and() {
        let v = vec![
            asignatura("Bases de datos", "1IFC31", "INF02", "Informática y comunicaciones", Some(Turno::Manana)),
            asignatura("Bases de datos", "2IFC31", "INF02", "Informática y comunicaciones", Some(Turno::Tarde)),
            asignatura("Contabilidad", "2ADG", "AE01", "Administración y gestión", Some(Turno::Tarde)),
        ];
        assert_eq!(filtrar(&v, &filtro("inf02", "", "", "")).len(), 2);
        assert_eq!(filtrar(&v, &filtro("bases", "", "T", "")).len(), 1);
        assert_eq!(filtrar(&v, &filtro("", "Informática y comunicaciones", "", "1IFC31")).len(), 1);
        assert!(filtrar(&v, &filtro("contab", "Informática y comunicaciones", "", "")).is_empty());
        assert!(filtro(" ", "all", "", "").es_vacio());
    }
}
