//! Revisión de políticas al arrancar.
//!
//! No cambia la precedencia: sólo informa de reglas que nunca podrán
//! aplicarse o de etiquetas fuera del listado oficial.

use serde::Serialize;
use std::fmt;

use super::politica::{es_departamento_oficial, PoliticaClasificacion};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum AvisoPolitica {
    /// La regla `regla` nunca se aplica porque `por` (anterior) es prefijo suyo
    Sombreada {
        regla: usize,
        prefijo: String,
        por: usize,
        prefijo_previo: String,
    },
    Duplicada {
        regla: usize,
        prefijo: String,
        primera: usize,
    },
    /// Un prefijo vacío coincide con cualquier código
    PrefijoVacio { regla: usize },
    /// `regla == None` indica el departamento por defecto
    DepartamentoNoOficial {
        regla: Option<usize>,
        departamento: String,
    },
}

impl fmt::Display for AvisoPolitica {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvisoPolitica::Sombreada { regla, prefijo, por, prefijo_previo } => write!(
                f,
                "la regla #{} ('{}') queda tapada por la regla #{} ('{}')",
                regla, prefijo, por, prefijo_previo
            ),
            AvisoPolitica::Duplicada { regla, prefijo, primera } => {
                write!(f, "la regla #{} repite el prefijo '{}' de la regla #{}", regla, prefijo, primera)
            }
            AvisoPolitica::PrefijoVacio { regla } => {
                write!(f, "la regla #{} tiene prefijo vacío y coincide con todo", regla)
            }
            AvisoPolitica::DepartamentoNoOficial { regla: Some(r), departamento } => {
                write!(f, "la regla #{} usa el departamento no oficial '{}'", r, departamento)
            }
            AvisoPolitica::DepartamentoNoOficial { regla: None, departamento } => {
                write!(f, "el departamento por defecto '{}' no es oficial", departamento)
            }
        }
    }
}

/// Revisa una política. Los prefijos se comparan ya normalizados con el
/// modo de la política, igual que hace el motor.
pub fn revisar_politica(politica: &PoliticaClasificacion) -> Vec<AvisoPolitica> {
    let normalizados: Vec<String> = politica
        .reglas
        .iter()
        .map(|r| politica.modo.normalizar(&r.prefijo))
        .collect();

    let mut avisos = Vec::new();
    for (j, actual) in normalizados.iter().enumerate() {
        if actual.is_empty() {
            avisos.push(AvisoPolitica::PrefijoVacio { regla: j });
        }
        // basta con informar de la primera regla anterior que la tapa
        if let Some((i, previo)) = normalizados[..j]
            .iter()
            .enumerate()
            .find(|(_, previo)| actual.starts_with(previo.as_str()))
        {
            if previo == actual {
                avisos.push(AvisoPolitica::Duplicada {
                    regla: j,
                    prefijo: politica.reglas[j].prefijo.clone(),
                    primera: i,
                });
            } else {
                avisos.push(AvisoPolitica::Sombreada {
                    regla: j,
                    prefijo: politica.reglas[j].prefijo.clone(),
                    por: i,
                    prefijo_previo: politica.reglas[i].prefijo.clone(),
                });
            }
        }
        if !es_departamento_oficial(&politica.reglas[j].departamento) {
            avisos.push(AvisoPolitica::DepartamentoNoOficial {
                regla: Some(j),
                departamento: politica.reglas[j].departamento.clone(),
            });
        }
    }
    if !es_departamento_oficial(&politica.por_defecto) {
        avisos.push(AvisoPolitica::DepartamentoNoOficial {
            regla: None,
            departamento: politica.por_defecto.clone(),
        });
    }
    avisos
}
