//! Carga de los conjuntos de datos.
//!
//! Submódulos:
//! - `fuente`: de dónde sale el texto (HTTP, archivo, memoria)
//! - `registros`: fila → registro tipado para cada fichero
//! - `formato`: curso y descripción de los módulos
//!
//! Flujo por fichero: leer → separar filas → reparar / clasificar → registro.
//! Un fallo al leer nunca se propaga: se registra, se avisa al callback
//! opcional y el conjunto queda vacío.

pub mod formato;
pub mod fuente;
pub mod registros;

pub use fuente::{fuente_desde_referencia, FuenteArchivo, FuenteEstatica, FuenteHttp, FuenteTexto};
pub use registros::RegistroCsv;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::agregacion::con_carga_actual;
use crate::clasificacion::Clasificadores;
use crate::csv::filas_de;
use crate::error::CargaError;
use crate::models::{Asignacion, Asignatura, Modulo, NombreAsignatura, Profesor};

/// Callback de fallo: recibe el nombre de la entidad y el error.
pub type AvisoFallo = dyn Fn(&str, &CargaError) + Send + Sync;

/// Separa y mapea un texto ya leído.
pub fn parsear<T: RegistroCsv>(texto: &str, clasificadores: &Clasificadores) -> Vec<T> {
    let registros = filas_de(texto, &T::ESQUEMA)
        .filter_map(|fila| T::desde_fila(&fila, clasificadores))
        .collect();
    T::finalizar(registros)
}

/// Lee la fuente y devuelve sus registros.
pub async fn cargar<T: RegistroCsv>(
    fuente: &dyn FuenteTexto,
    clasificadores: &Clasificadores,
) -> Result<Vec<T>, CargaError> {
    let texto = fuente.leer().await?;
    let registros = parsear::<T>(&texto, clasificadores);
    tracing::debug!(
        entidad = T::ESQUEMA.entidad,
        origen = %fuente.origen(),
        registros = registros.len(),
        "✅ cargado"
    );
    Ok(registros)
}

/// Como `cargar`, pero un error deja el conjunto vacío.
pub async fn cargar_o_vacio<T: RegistroCsv>(
    fuente: &dyn FuenteTexto,
    clasificadores: &Clasificadores,
    aviso: Option<&AvisoFallo>,
) -> Result<Vec<T>, FalloCarga> {
    match cargar::<T>(fuente, clasificadores).await {
        Ok(registros) => Ok(registros),
        Err(e) => {
            tracing::error!(entidad = T::ESQUEMA.entidad, origen = %fuente.origen(), "❌ {}", e);
            if let Some(aviso) = aviso {
                aviso(T::ESQUEMA.entidad, &e);
            }
            Err(FalloCarga {
                entidad: T::ESQUEMA.entidad.to_string(),
                origen: fuente.origen(),
                mensaje: e.to_string(),
            })
        }
    }
}

/// Fuente que no se pudo leer en una carga.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FalloCarga {
    pub entidad: String,
    pub origen: String,
    pub mensaje: String,
}

/// Las fuentes de una carga completa. El catálogo de nombres es opcional.
pub struct Fuentes {
    pub profesores: Box<dyn FuenteTexto>,
    pub asignaciones: Box<dyn FuenteTexto>,
    pub asignaturas: Box<dyn FuenteTexto>,
    pub modulos: Box<dyn FuenteTexto>,
    pub nombres: Option<Box<dyn FuenteTexto>>,
}

/// Instantánea inmutable de una carga.
#[derive(Debug, Clone, Serialize)]
pub struct ConjuntoDatos {
    /// Con `carga_actual` ya calculada.
    pub profesores: Vec<Profesor>,
    pub asignaciones: Vec<Asignacion>,
    pub asignaturas: Vec<Asignatura>,
    pub modulos: Vec<Modulo>,
    pub nombres: Vec<NombreAsignatura>,
    pub fallos: Vec<FalloCarga>,
    pub cargado_en: DateTime<Utc>,
}

impl ConjuntoDatos {
    pub fn vacio() -> Self {
        ConjuntoDatos {
            profesores: Vec::new(),
            asignaciones: Vec::new(),
            asignaturas: Vec::new(),
            modulos: Vec::new(),
            nombres: Vec::new(),
            fallos: Vec::new(),
            cargado_en: Utc::now(),
        }
    }
}

pub struct Cargador {
    fuentes: Fuentes,
    clasificadores: Clasificadores,
    aviso: Option<Box<AvisoFallo>>,
}

impl Cargador {
    pub fn new(fuentes: Fuentes, clasificadores: Clasificadores) -> Self {
        Cargador {
            fuentes,
            clasificadores,
            aviso: None,
        }
    }

    /// Callback que se llama por cada fuente que falla.
    pub fn con_aviso(mut self, aviso: impl Fn(&str, &CargaError) + Send + Sync + 'static) -> Self {
        self.aviso = Some(Box::new(aviso));
        self
    }

    pub fn clasificadores(&self) -> &Clasificadores {
        &self.clasificadores
    }

    /// Lanza todas las lecturas a la vez y espera a que terminen. Cada
    /// fuente falla por su cuenta sin afectar a las demás.
    pub async fn cargar_todo(&self) -> ConjuntoDatos {
        let clas = &self.clasificadores;
        let aviso = self.aviso.as_deref();
        let f = &self.fuentes;

        let nombres = async {
            match &f.nombres {
                Some(fuente) => cargar_o_vacio::<NombreAsignatura>(fuente.as_ref(), clas, aviso).await,
                None => Ok(Vec::new()),
            }
        };
        let (profesores, asignaciones, asignaturas, modulos, nombres) = tokio::join!(
            cargar_o_vacio::<Profesor>(f.profesores.as_ref(), clas, aviso),
            cargar_o_vacio::<Asignacion>(f.asignaciones.as_ref(), clas, aviso),
            cargar_o_vacio::<Asignatura>(f.asignaturas.as_ref(), clas, aviso),
            cargar_o_vacio::<Modulo>(f.modulos.as_ref(), clas, aviso),
            nombres,
        );

        let mut fallos = Vec::new();
        let profesores = o_vacio(profesores, &mut fallos);
        let asignaciones = o_vacio(asignaciones, &mut fallos);
        let asignaturas = o_vacio(asignaturas, &mut fallos);
        let modulos = o_vacio(modulos, &mut fallos);
        let nombres = o_vacio(nombres, &mut fallos);

        let profesores = con_carga_actual(&profesores, &asignaciones);
        tracing::info!(
            profesores = profesores.len(),
            asignaciones = asignaciones.len(),
            asignaturas = asignaturas.len(),
            modulos = modulos.len(),
            fallos = fallos.len(),
            "🔍 datos cargados"
        );

        ConjuntoDatos {
            profesores,
            asignaciones,
            asignaturas,
            modulos,
            nombres,
            fallos,
            cargado_en: Utc::now(),
        }
    }
}

fn o_vacio<T>(resultado: Result<Vec<T>, FalloCarga>, fallos: &mut Vec<FalloCarga>) -> Vec<T> {
    resultado.unwrap_or_else(|fallo| {
        fallos.push(fallo);
        Vec::new()
    })
}
