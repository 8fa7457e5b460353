//! Políticas de clasificación: datos, no código.
//!
//! Una política es una lista ordenada de reglas `prefijo → departamento` más
//! un departamento por defecto. Se pueden leer de JSON para sustituir las
//! tablas incluidas sin tocar el motor.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CargaError;

/// Los diez departamentos oficiales del centro, en el orden en que se muestran.
pub const DEPARTAMENTOS_OFICIALES: [&str; 10] = [
    "Actividades físicas y deportivas",
    "Administración y gestión",
    "Comercio y marketing",
    "Fabricación mecánica",
    "Informática y comunicaciones",
    "Instalación y mantenimiento",
    "Madera, mueble y corcho",
    "Química",
    "FOL",
    "Inglés",
];

pub const DEPARTAMENTO_POR_DEFECTO: &str = "Inglés";

pub fn es_departamento_oficial(nombre: &str) -> bool {
    DEPARTAMENTOS_OFICIALES.contains(&nombre)
}

/// Cómo se prepara el código antes de comparar prefijos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModoCoincidencia {
    /// Recortar y pasar a mayúsculas (abreviaturas de profesor)
    Prefijo,
    /// Quitar todo lo que no sea letra ASCII y pasar a mayúsculas (códigos de grupo)
    SoloLetras,
}

impl ModoCoincidencia {
    pub fn normalizar(&self, codigo: &str) -> String {
        match self {
            ModoCoincidencia::Prefijo => codigo.trim().to_uppercase(),
            ModoCoincidencia::SoloLetras => codigo
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReglaPrefijo {
    pub prefijo: String,
    pub departamento: String,
}

impl ReglaPrefijo {
    pub fn new(prefijo: &str, departamento: &str) -> Self {
        ReglaPrefijo {
            prefijo: prefijo.to_string(),
            departamento: departamento.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticaClasificacion {
    pub modo: ModoCoincidencia,
    pub reglas: Vec<ReglaPrefijo>,
    #[serde(default = "por_defecto")]
    pub por_defecto: String,
}

fn por_defecto() -> String {
    DEPARTAMENTO_POR_DEFECTO.to_string()
}

impl PoliticaClasificacion {
    /// Construye una política a partir de grupos `(prefijos, departamento)`,
    /// conservando el orden.
    pub fn desde_grupos(modo: ModoCoincidencia, grupos: &[(&[&str], &str)]) -> Self {
        let reglas = grupos
            .iter()
            .flat_map(|(prefijos, departamento)| {
                prefijos.iter().map(move |p| ReglaPrefijo::new(p, departamento))
            })
            .collect();
        PoliticaClasificacion {
            modo,
            reglas,
            por_defecto: por_defecto(),
        }
    }

    pub fn desde_json(json: &str) -> Result<Self, CargaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn desde_archivo<P: AsRef<Path>>(ruta: P) -> Result<Self, CargaError> {
        let ruta = ruta.as_ref();
        let contenido = std::fs::read_to_string(ruta).map_err(|fuente| CargaError::Io {
            origen: ruta.display().to_string(),
            fuente,
        })?;
        Self::desde_json(&contenido)
    }
}

/// Política por abreviatura de profesor.
pub fn politica_profesores() -> PoliticaClasificacion {
    PoliticaClasificacion::desde_grupos(
        ModoCoincidencia::Prefijo,
        &[
            (&["AE", "PGA"], "Administración y gestión"),
            (&["AQI"], "Química"),
            (&["EF"], "Actividades físicas y deportivas"),
            (&["FO", "ETF", "ESP", "SAI", "PPM", "OSE", "ORI", "PSA"], "FOL"),
            (&["FIC", "INF", "SEA"], "Informática y comunicaciones"),
            (&["IE", "MAT", "MV", "SOL"], "Instalación y mantenimiento"),
            (&["MM", "OF"], "Fabricación mecánica"),
            (&["OGC", "PC"], "Comercio y marketing"),
            (&["ING"], "Inglés"),
        ],
    )
}

/// Política por código de grupo (sólo letras).
pub fn politica_grupos() -> PoliticaClasificacion {
    PoliticaClasificacion::desde_grupos(
        ModoCoincidencia::SoloLetras,
        &[
            (&["AFD"], "Actividades físicas y deportivas"),
            (&["ADG"], "Administración y gestión"),
            (&["COM", "VCOM"], "Comercio y marketing"),
            (&["FME"], "Fabricación mecánica"),
            (&["IFC", "VIFC"], "Informática y comunicaciones"),
            (&["IMA", "MSP"], "Instalación y mantenimiento"),
            (&["MAM"], "Madera, mueble y corcho"),
            (&["QUI"], "Química"),
            (&["DMSP"], "FOL"),
        ],
    )
}
