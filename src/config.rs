//! Configuración por variables de entorno (con `.env` opcional).
//!
//! | variable                      | por defecto        |
//! |-------------------------------|--------------------|
//! | `CARGA_BIND`                  | `127.0.0.1:8080`   |
//! | `CARGA_DATAFILES_DIR`         | `datafiles`        |
//! | `CARGA_TIMEOUT_SECS`          | `15`               |
//! | `CARGA_FUENTE_PROFESORES`     | `Prof.csv`         |
//! | `CARGA_FUENTE_ASIGNACIONES`   | `soluc.csv`        |
//! | `CARGA_FUENTE_ASIGNATURAS`    | `Asig.csv`         |
//! | `CARGA_FUENTE_MODULOS`        | `Grup.csv`         |
//! | `CARGA_FUENTE_NOMBRES`        | (sin catálogo)     |
//! | `CARGA_POLITICA_PROFESORES`   | (política incluida)|
//! | `CARGA_POLITICA_GRUPOS`       | (política incluida)|
//!
//! Las fuentes son URLs `http(s)://` o rutas; las rutas relativas se
//! resuelven contra `CARGA_DATAFILES_DIR`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::carga::{fuente_desde_referencia, Fuentes};
use crate::clasificacion::{politica_grupos, politica_profesores, Clasificadores, PoliticaClasificacion};
use crate::error::CargaError;

pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";
pub const DATAFILES_POR_DEFECTO: &str = "datafiles";
pub const TIMEOUT_POR_DEFECTO: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub dir_datos: PathBuf,
    pub timeout: Duration,
    pub fuente_profesores: String,
    pub fuente_asignaciones: String,
    pub fuente_asignaturas: String,
    pub fuente_modulos: String,
    pub fuente_nombres: Option<String>,
    pub politica_profesores: Option<PathBuf>,
    pub politica_grupos: Option<PathBuf>,
}

fn load_dotenv() {
    // No pasa nada si no existe el archivo .env
    let _ = dotenv::dotenv();
}

impl Config {
    /// Lee `.env` (si existe) y después el entorno del proceso.
    pub fn desde_entorno() -> Result<Config, CargaError> {
        load_dotenv();
        Config::desde_lector(|clave| env::var(clave).ok())
    }

    /// Igual que `desde_entorno` pero con una función de consulta; los
    /// valores vacíos cuentan como ausentes.
    pub fn desde_lector<F>(leer: F) -> Result<Config, CargaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let valor = |clave: &str| leer(clave).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let con_defecto = |clave: &str, defecto: &str| valor(clave).unwrap_or_else(|| defecto.to_string());

        let timeout = match valor("CARGA_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|_| {
                CargaError::Config(format!("CARGA_TIMEOUT_SECS debe ser un entero de segundos, no '{}'", v))
            })?,
            None => TIMEOUT_POR_DEFECTO,
        };

        Ok(Config {
            bind: con_defecto("CARGA_BIND", BIND_POR_DEFECTO),
            dir_datos: PathBuf::from(con_defecto("CARGA_DATAFILES_DIR", DATAFILES_POR_DEFECTO)),
            timeout: Duration::from_secs(timeout),
            fuente_profesores: con_defecto("CARGA_FUENTE_PROFESORES", "Prof.csv"),
            fuente_asignaciones: con_defecto("CARGA_FUENTE_ASIGNACIONES", "soluc.csv"),
            fuente_asignaturas: con_defecto("CARGA_FUENTE_ASIGNATURAS", "Asig.csv"),
            fuente_modulos: con_defecto("CARGA_FUENTE_MODULOS", "Grup.csv"),
            fuente_nombres: valor("CARGA_FUENTE_NOMBRES"),
            politica_profesores: valor("CARGA_POLITICA_PROFESORES").map(PathBuf::from),
            politica_grupos: valor("CARGA_POLITICA_GRUPOS").map(PathBuf::from),
        })
    }

    /// Cliente HTTP compartido por todas las fuentes remotas.
    pub fn cliente_http(&self) -> Result<reqwest::Client, CargaError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| CargaError::Config(format!("no se pudo crear el cliente HTTP: {}", e)))
    }

    pub fn fuentes(&self, cliente: &reqwest::Client) -> Fuentes {
        let fuente = |referencia: &str| fuente_desde_referencia(referencia, &self.dir_datos, cliente);
        Fuentes {
            profesores: fuente(&self.fuente_profesores),
            asignaciones: fuente(&self.fuente_asignaciones),
            asignaturas: fuente(&self.fuente_asignaturas),
            modulos: fuente(&self.fuente_modulos),
            nombres: self.fuente_nombres.as_deref().map(fuente),
        }
    }

    /// Políticas configuradas o las incluidas.
    pub fn clasificadores(&self) -> Result<Clasificadores, CargaError> {
        let cargar = |ruta: &Option<PathBuf>, incluida: fn() -> PoliticaClasificacion| match ruta {
            Some(r) => {
                tracing::info!(ruta = %r.display(), "política de clasificación desde archivo");
                PoliticaClasificacion::desde_archivo(r)
            }
            None => Ok(incluida()),
        };
        Ok(Clasificadores::new(
            cargar(&self.politica_profesores, politica_profesores)?,
            cargar(&self.politica_grupos, politica_grupos)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pares: &[(&str, &str)]) -> Result<Config, CargaError> {
        let mapa: HashMap<String, String> =
            pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::desde_lector(|k| mapa.get(k).cloned())
    }

    #[test]
    fn valores_por_defecto() {
        let c = config(&[]).unwrap();
        assert_eq!(c.bind, "127.0.0.1:8080");
        assert_eq!(c.dir_datos, PathBuf::from("datafiles"));
        assert_eq!(c.timeout, Duration::from_secs(15));
        assert_eq!(c.fuente_profesores, "Prof.csv");
        assert_eq!(c.fuente_nombres, None);
        assert_eq!(c.politica_grupos, None);
    }

    #[test]
    fn variables_y_vacios() {
        let c = config(&[
            ("CARGA_BIND", "0.0.0.0:9000"),
            ("CARGA_TIMEOUT_SECS", " 3 "),
            ("CARGA_FUENTE_NOMBRES", "NomAsg.csv"),
            ("CARGA_FUENTE_MODULOS", "   "),
        ])
        .unwrap();
        assert_eq!(c.bind, "0.0.0.0:9000");
        assert_eq!(c.timeout, Duration::from_secs(3));
        assert_eq!(c.fuente_nombres.as_deref(), Some("NomAsg.csv"));
        assert_eq!(c.fuente_modulos, "Grup.csv");
    }

    #[test]
    fn timeout_invalido() {
        assert!(matches!(config(&[("CARGA_TIMEOUT_SECS", "diez")]), Err(CargaError::Config(_))));
    }

    #[test]
    fn fuentes_segun_referencia() {
        let c = config(&[
            ("CARGA_DATAFILES_DIR", "/srv/datos"),
            ("CARGA_FUENTE_ASIGNATURAS", "https://ejemplo.org/Asig.csv"),
        ])
        .unwrap();
        let f = c.fuentes(&reqwest::Client::new());
        assert_eq!(f.asignaturas.origen(), "https://ejemplo.org/Asig.csv");
        assert_eq!(f.profesores.origen(), PathBuf::from("/srv/datos").join("Prof.csv").display().to_string());
        assert!(f.nombres.is_none());
    }

    #[test]
    fn politica_inexistente_es_error() {
        let c = config(&[("CARGA_POLITICA_GRUPOS", "/no/existe/grupos.json")]).unwrap();
        assert!(c.clasificadores().is_err());
        assert!(config(&[]).unwrap().clasificadores().is_ok());
    }
}
