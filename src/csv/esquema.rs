//! Esquemas de columnas de cada fichero.
//!
//! Cada columna declara aquí su nombre y su índice (base 0); los
//! cargadores sólo usan estas constantes, nunca números sueltos.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columna {
    pub nombre: &'static str,
    pub indice: usize,
    /// Una columna opcional puede quedar fuera de `min_campos`
    pub opcional: bool,
}

impl Columna {
    pub const fn requerida(nombre: &'static str, indice: usize) -> Self {
        Columna { nombre, indice, opcional: false }
    }

    pub const fn opcional(nombre: &'static str, indice: usize) -> Self {
        Columna { nombre, indice, opcional: true }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EsquemaCampos {
    pub entidad: &'static str,
    pub min_campos: usize,
    pub columnas: &'static [Columna],
}

impl EsquemaCampos {
    pub fn columna(&self, nombre: &str) -> Option<Columna> {
        self.columnas.iter().copied().find(|c| c.nombre == nombre)
    }

    /// Comprueba que no haya nombres ni índices repetidos y que toda
    /// columna requerida quepa en `min_campos`.
    pub fn validar(&self) -> Result<(), String> {
        for (i, a) in self.columnas.iter().enumerate() {
            for b in &self.columnas[i + 1..] {
                if a.nombre == b.nombre {
                    return Err(format!("{}: columna '{}' repetida", self.entidad, a.nombre));
                }
                if a.indice == b.indice {
                    return Err(format!(
                        "{}: '{}' y '{}' comparten el índice {}",
                        self.entidad, a.nombre, b.nombre, a.indice
                    ));
                }
            }
            if !a.opcional && a.indice >= self.min_campos {
                return Err(format!(
                    "{}: la columna requerida '{}' (índice {}) queda fuera de min_campos={}",
                    self.entidad, a.nombre, a.indice, self.min_campos
                ));
            }
        }
        Ok(())
    }
}

pub mod profesores {
    use super::{Columna, EsquemaCampos};

    pub const ID: Columna = Columna::requerida("ID", 1);
    pub const ABREV: Columna = Columna::requerida("ABREV", 2);
    pub const MAX_HORAS: Columna = Columna::requerida("MAXHORAS", 3);
    pub const MIN_HORAS: Columna = Columna::requerida("MINHORAS", 4);
    /// Texto libre del fichero; el departamento real se deriva de `ABREV`
    pub const DEPARTAMENTO: Columna = Columna::requerida("DEPARTAMENTO", 5);
    pub const EMAIL: Columna = Columna::requerida("EMAIL", 8);

    pub const ESQUEMA: EsquemaCampos = EsquemaCampos {
        entidad: "profesores",
        min_campos: 11,
        columnas: &[ID, ABREV, MAX_HORAS, MIN_HORAS, DEPARTAMENTO, EMAIL],
    };
}

pub mod asignaciones {
    use super::{Columna, EsquemaCampos};

    pub const ASIGNATURA: Columna = Columna::requerida("ASIGNATURA", 0);
    pub const PROFESOR: Columna = Columna::requerida("PROFESOR", 1);
    pub const GRUP: Columna = Columna::requerida("GRUP", 2);
    pub const TURNO: Columna = Columna::requerida("TURNO", 3);
    pub const NIVEL: Columna = Columna::requerida("NIVEL", 4);
    pub const CURSO: Columna = Columna::requerida("CURSO", 5);
    pub const GRUPO: Columna = Columna::requerida("GRUPO", 6);
    pub const AULA: Columna = Columna::requerida("AULA", 7);
    pub const TAREA: Columna = Columna::requerida("TAREA", 8);
    pub const DIA: Columna = Columna::requerida("DIA", 9);
    pub const HORA: Columna = Columna::requerida("HORA", 10);
    pub const SESIONES: Columna = Columna::requerida("SESIONES", 11);
    pub const MARCO: Columna = Columna::requerida("MARCO", 12);
    pub const CONCIERTO: Columna = Columna::requerida("CONCIERTO", 13);
    pub const ALUMNOS: Columna = Columna::requerida("ALUMNOS", 14);

    pub const ESQUEMA: EsquemaCampos = EsquemaCampos {
        entidad: "asignaciones",
        min_campos: 15,
        columnas: &[
            ASIGNATURA, PROFESOR, GRUP, TURNO, NIVEL, CURSO, GRUPO, AULA, TAREA, DIA, HORA,
            SESIONES, MARCO, CONCIERTO, ALUMNOS,
        ],
    };
}

pub mod asignaturas {
    use super::{Columna, EsquemaCampos};

    pub const NOMASIG: Columna = Columna::requerida("NOMASIG", 0);
    pub const ASIG: Columna = Columna::requerida("ASIG", 1);
    pub const GRUP: Columna = Columna::requerida("GRUP", 2);
    pub const PROF: Columna = Columna::requerida("PROF", 3);
    pub const TURNO: Columna = Columna::opcional("TURNO", 4);
    pub const NIVEL: Columna = Columna::opcional("NIVEL", 5);
    pub const CURSO: Columna = Columna::opcional("CURSO", 6);
    pub const GRUPO: Columna = Columna::opcional("GRUPO", 7);
    pub const AULA: Columna = Columna::opcional("AULA", 8);
    pub const TAREA: Columna = Columna::opcional("TAREA", 9);
    pub const DIA: Columna = Columna::opcional("DIA", 10);
    pub const HORA: Columna = Columna::opcional("HORA", 11);
    pub const SESIONES: Columna = Columna::opcional("SESIONES", 12);
    pub const MARCO: Columna = Columna::opcional("MARCO", 13);
    pub const CONCIERTO: Columna = Columna::opcional("CONCIERTO", 14);
    pub const ALUMNOS: Columna = Columna::opcional("ALUMNOS", 15);

    pub const ESQUEMA: EsquemaCampos = EsquemaCampos {
        entidad: "asignaturas",
        min_campos: 4,
        columnas: &[
            NOMASIG, ASIG, GRUP, PROF, TURNO, NIVEL, CURSO, GRUPO, AULA, TAREA, DIA, HORA,
            SESIONES, MARCO, CONCIERTO, ALUMNOS,
        ],
    };
}

pub mod modulos {
    use super::{Columna, EsquemaCampos};

    pub const ABREV: Columna = Columna::requerida("ABREV", 2);
    pub const TURNO: Columna = Columna::requerida("TURNO", 3);
    pub const CURSO: Columna = Columna::requerida("CURSO", 5);
    pub const MAX_ALUMNOS: Columna = Columna::requerida("MAXALUM", 7);
    pub const DESCRIPCION: Columna = Columna::requerida("DESCRIP", 8);
    pub const TUTOR: Columna = Columna::requerida("TUTOR", 9);

    pub const ESQUEMA: EsquemaCampos = EsquemaCampos {
        entidad: "modulos",
        min_campos: 14,
        columnas: &[ABREV, TURNO, CURSO, MAX_ALUMNOS, DESCRIPCION, TUTOR],
    };
}

pub mod nombres {
    use super::{Columna, EsquemaCampos};

    pub const ID: Columna = Columna::requerida("ID", 0);
    pub const ASIG: Columna = Columna::requerida("ASIG", 1);
    pub const NOMBRE: Columna = Columna::requerida("NOMBRE", 2);
    pub const DEPARTAMENTO: Columna = Columna::requerida("DEPARTAMENTO", 3);

    pub const ESQUEMA: EsquemaCampos = EsquemaCampos {
        entidad: "nombres",
        min_campos: 4,
        columnas: &[ID, ASIG, NOMBRE, DEPARTAMENTO],
    };
}

/// Todos los esquemas conocidos, para validarlos de una vez.
pub const TODOS: &[EsquemaCampos] = &[
    profesores::ESQUEMA,
    asignaciones::ESQUEMA,
    asignaturas::ESQUEMA,
    modulos::ESQUEMA,
    nombres::ESQUEMA,
];
