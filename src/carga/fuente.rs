//! Orígenes de texto para los cargadores.
//!
//! El cargador no sabe de dónde sale el texto: recibe un `FuenteTexto`.
//! Hay tres implementaciones: HTTP, archivo local y texto fijo (útil en
//! pruebas).

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::CargaError;

#[async_trait]
pub trait FuenteTexto: Send + Sync {
    /// Lee el recurso completo como texto.
    async fn leer(&self) -> Result<String, CargaError>;

    /// Descripción para logs y errores (URL, ruta…).
    fn origen(&self) -> String;
}

/// Recurso remoto leído con `reqwest`.
pub struct FuenteHttp {
    url: String,
    cliente: reqwest::Client,
}

impl FuenteHttp {
    pub fn new(url: impl Into<String>, cliente: reqwest::Client) -> Self {
        FuenteHttp { url: url.into(), cliente }
    }
}

#[async_trait]
impl FuenteTexto for FuenteHttp {
    async fn leer(&self) -> Result<String, CargaError> {
        let http = |fuente: reqwest::Error| CargaError::Http { origen: self.url.clone(), fuente };
        let respuesta = self.cliente.get(&self.url).send().await.map_err(http)?;
        let estado = respuesta.status();
        if !estado.is_success() {
            return Err(CargaError::Estado {
                origen: self.url.clone(),
                estado: estado.as_u16(),
            });
        }
        let bytes = respuesta.bytes().await.map_err(http)?;
        Ok(decodificar_bytes(&bytes))
    }

    fn origen(&self) -> String {
        self.url.clone()
    }
}

/// Archivo local.
pub struct FuenteArchivo {
    ruta: PathBuf,
}

impl FuenteArchivo {
    pub fn new(ruta: impl Into<PathBuf>) -> Self {
        FuenteArchivo { ruta: ruta.into() }
    }
}

#[async_trait]
impl FuenteTexto for FuenteArchivo {
    async fn leer(&self) -> Result<String, CargaError> {
        let bytes = tokio::fs::read(&self.ruta).await.map_err(|fuente| CargaError::Io {
            origen: self.ruta.display().to_string(),
            fuente,
        })?;
        Ok(decodificar_bytes(&bytes))
    }

    fn origen(&self) -> String {
        self.ruta.display().to_string()
    }
}

/// Texto en memoria.
pub struct FuenteEstatica {
    nombre: String,
    contenido: String,
}

impl FuenteEstatica {
    pub fn new(nombre: impl Into<String>, contenido: impl Into<String>) -> Self {
        FuenteEstatica {
            nombre: nombre.into(),
            contenido: contenido.into(),
        }
    }
}

#[async_trait]
impl FuenteTexto for FuenteEstatica {
    async fn leer(&self) -> Result<String, CargaError> {
        Ok(self.contenido.clone())
    }

    fn origen(&self) -> String {
        self.nombre.clone()
    }
}

/// Elige la fuente según la referencia: `http(s)://` va por red; cualquier
/// otra cosa es una ruta, relativa a `dir_datos` si no es absoluta.
pub fn fuente_desde_referencia(
    referencia: &str,
    dir_datos: &Path,
    cliente: &reqwest::Client,
) -> Box<dyn FuenteTexto> {
    let referencia = referencia.trim();
    let minusculas = referencia.to_lowercase();
    if minusculas.starts_with("http://") || minusculas.starts_with("https://") {
        return Box::new(FuenteHttp::new(referencia, cliente.clone()));
    }
    let ruta = Path::new(referencia);
    if ruta.is_absolute() {
        Box::new(FuenteArchivo::new(ruta))
    } else {
        Box::new(FuenteArchivo::new(dir_datos.join(ruta)))
    }
}

/// UTF-8 si es válido (sin BOM); si no, se interpreta como Latin-1, que es
/// como suelen exportarse estos CSV desde la aplicación de horarios.
pub fn decodificar_bytes(bytes: &[u8]) -> String {
    let sin_bom = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(bytes);
    match std::str::from_utf8(sin_bom) {
        Ok(s) => s.to_string(),
        Err(_) => sin_bom.iter().map(|&b| b as char).collect(),
    }
}
