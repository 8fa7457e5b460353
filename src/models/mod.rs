// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Turno lectivo (columna TURNO de los CSV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turno {
    #[serde(rename = "M")]
    Manana,
    #[serde(rename = "T")]
    Tarde,
    #[serde(rename = "V")]
    Vespertino,
    #[serde(rename = "N")]
    Nocturno,
}

impl Turno {
    /// Interpreta el código de una letra; cualquier otro valor devuelve `None`.
    pub fn desde_codigo(codigo: &str) -> Option<Turno> {
        let codigo = codigo.trim();
        match codigo.to_uppercase().as_str() {
            "M" => Some(Turno::Manana),
            "T" => Some(Turno::Tarde),
            "V" => Some(Turno::Vespertino),
            "N" => Some(Turno::Nocturno),
            "" => None,
            _ => {
                tracing::debug!(codigo, "🔍 turno desconocido, se deja sin turno");
                None
            }
        }
    }

    pub fn codigo(&self) -> &'static str {
        match self {
            Turno::Manana => "M",
            Turno::Tarde => "T",
            Turno::Vespertino => "V",
            Turno::Nocturno => "N",
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Turno::Manana => "Mañana",
            Turno::Tarde => "Tarde",
            Turno::Vespertino => "Vespertino",
            Turno::Nocturno => "Nocturno",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profesor {
    pub id: String,
    /// Abreviatura: clave natural con la que las asignaciones referencian al profesor
    pub abrev: String,
    pub max_horas: u32,
    pub min_horas: u32,
    /// Derivado de `abrev` con la política de profesores
    pub departamento: String,
    pub email: String,
    /// Suma de sesiones de sus asignaciones; se recalcula en cada carga
    pub carga_actual: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asignacion {
    pub asignatura: String,
    pub profesor: String,
    pub codigo_grupo: String,
    pub turno: Option<Turno>,
    pub nivel: String,
    pub curso: String,
    pub grupo: String,
    pub aula: String,
    pub tarea: String,
    pub dia: u32,
    pub hora: u32,
    pub sesiones: u32,
    pub marco: String,
    pub concierto: String,
    pub alumnos: u32,
}

/// Grupo de docencia (fichero de grupos).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modulo {
    pub codigo_grupo: String,
    /// "1", "2" o vacío
    pub curso: String,
    pub turno: Option<Turno>,
    pub descripcion: String,
    pub tutor: String,
    pub max_alumnos: u32,
    pub departamento: String,
}

/// Unidad lectiva programada dentro de un módulo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asignatura {
    pub nombre: String,
    pub codigo: String,
    pub codigo_grupo: String,
    pub profesor: String,
    pub turno: Option<Turno>,
    pub nivel: String,
    pub curso: String,
    pub grupo: String,
    pub aula: String,
    pub tarea: String,
    pub dia: u32,
    pub hora: u32,
    pub sesiones: u32,
    pub marco: String,
    pub concierto: String,
    pub alumnos: u32,
    pub departamento: String,
}

/// Entrada del catálogo de nombres de asignatura (opcional).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NombreAsignatura {
    pub id: String,
    pub codigo: String,
    pub nombre: String,
    pub departamento: String,
}
