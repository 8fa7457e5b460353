// Biblioteca raíz del crate `cargalectiva`.
// Carga los CSV del centro (profesores, asignaciones, asignaturas y grupos),
// repara el texto, clasifica por departamento y calcula los agregados del
// panel de carga lectiva. `run_server` expone todo como API JSON.
pub mod agregacion;
pub mod carga;
pub mod clasificacion;
pub mod config;
pub mod csv;
pub mod error;
pub mod models;
pub mod server;
mod server_handlers;
pub mod texto;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use carga::{Cargador, ConjuntoDatos, FalloCarga, Fuentes};
pub use clasificacion::{Clasificador, Clasificadores};
pub use config::Config;
pub use error::CargaError;
pub use texto::reparar_texto;
