//! Motor de clasificación por prefijo.
//!
//! Submódulos:
//! - `politica`: tablas de reglas (datos) y políticas incluidas
//! - `lint`: revisión de políticas (reglas tapadas, etiquetas no oficiales)
//!
//! Las reglas se evalúan en orden y gana la primera que coincide; si
//! ninguna coincide se devuelve el departamento por defecto. La
//! clasificación es total: nunca falla y nunca devuelve vacío salvo que la
//! propia política lo configure así.

pub mod lint;
pub mod politica;

pub use lint::{revisar_politica, AvisoPolitica};
pub use politica::{
    es_departamento_oficial, politica_grupos, politica_profesores, ModoCoincidencia,
    PoliticaClasificacion, ReglaPrefijo, DEPARTAMENTOS_OFICIALES, DEPARTAMENTO_POR_DEFECTO,
};

/// Clasificador listo para usar: guarda los prefijos ya normalizados.
#[derive(Debug, Clone)]
pub struct Clasificador {
    politica: PoliticaClasificacion,
    prefijos: Vec<String>,
}

impl Clasificador {
    pub fn new(politica: PoliticaClasificacion) -> Self {
        let prefijos = politica
            .reglas
            .iter()
            .map(|r| politica.modo.normalizar(&r.prefijo))
            .collect();
        Clasificador { politica, prefijos }
    }

    /// Departamento de `codigo` según la política.
    pub fn clasificar(&self, codigo: &str) -> &str {
        let normalizado = self.politica.modo.normalizar(codigo);
        self.prefijos
            .iter()
            .position(|p| normalizado.starts_with(p.as_str()))
            .map(|i| self.politica.reglas[i].departamento.as_str())
            .unwrap_or(self.politica.por_defecto.as_str())
    }

    pub fn politica(&self) -> &PoliticaClasificacion {
        &self.politica
    }

    pub fn avisos(&self) -> Vec<AvisoPolitica> {
        revisar_politica(&self.politica)
    }
}

/// Los dos clasificadores que usa la carga: por profesor y por grupo.
#[derive(Debug, Clone)]
pub struct Clasificadores {
    pub profesores: Clasificador,
    pub grupos: Clasificador,
}

impl Clasificadores {
    pub fn new(profesores: PoliticaClasificacion, grupos: PoliticaClasificacion) -> Self {
        Clasificadores {
            profesores: Clasificador::new(profesores),
            grupos: Clasificador::new(grupos),
        }
    }

    /// Revisa ambas políticas y registra cada aviso.
    pub fn revisar(&self) -> Vec<(&'static str, AvisoPolitica)> {
        let mut todos = Vec::new();
        for (nombre, clasificador) in [("profesores", &self.profesores), ("grupos", &self.grupos)] {
            for aviso in clasificador.avisos() {
                tracing::warn!(politica = nombre, "⚠️  {}", aviso);
                todos.push((nombre, aviso));
            }
        }
        todos
    }
}

impl Default for Clasificadores {
    fn default() -> Self {
        Self::new(politica_profesores(), politica_grupos())
    }
}
