//! Errores del crate.
//!
//! Sólo la frontera del cargador (`carga`) convierte estos errores en
//! conjuntos vacíos; el resto de funciones los propagan con `?`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CargaError {
    #[error("error de red al leer '{origen}': {fuente}")]
    Http {
        origen: String,
        #[source]
        fuente: reqwest::Error,
    },

    #[error("respuesta HTTP {estado} al leer '{origen}'")]
    Estado { origen: String, estado: u16 },

    #[error("error de E/S en '{origen}': {fuente}")]
    Io {
        origen: String,
        #[source]
        fuente: std::io::Error,
    },

    #[error("política de clasificación inválida: {0}")]
    Politica(#[from] serde_json::Error),

    #[error("configuración inválida: {0}")]
    Config(String),
}
