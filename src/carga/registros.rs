//! Paso de fila a registro tipado para cada fichero.

use std::collections::HashSet;

use crate::clasificacion::Clasificadores;
use crate::csv::esquema::{asignaciones, asignaturas, modulos, nombres, profesores};
use crate::csv::{EsquemaCampos, Fila};
use crate::models::{Asignacion, Asignatura, Modulo, NombreAsignatura, Profesor, Turno};

use super::formato::{formatear_curso, formatear_descripcion};

/// Registro que se construye a partir de una fila de CSV.
pub trait RegistroCsv: Sized + Send {
    const ESQUEMA: EsquemaCampos;

    /// `None` descarta la fila.
    fn desde_fila(fila: &Fila, clasificadores: &Clasificadores) -> Option<Self>;

    /// Ajustes sobre la lista completa (p. ej. quitar duplicados).
    fn finalizar(registros: Vec<Self>) -> Vec<Self> {
        registros
    }
}

impl RegistroCsv for Profesor {
    const ESQUEMA: EsquemaCampos = profesores::ESQUEMA;

    fn desde_fila(fila: &Fila, clasificadores: &Clasificadores) -> Option<Self> {
        let abrev = fila.texto(profesores::ABREV).to_string();
        let max_horas = fila.entero(profesores::MAX_HORAS);
        let mut min_horas = fila.entero(profesores::MIN_HORAS);
        if min_horas > max_horas {
            tracing::debug!(abrev = %abrev, min_horas, max_horas, "mínimo de horas mayor que el máximo, se ajusta");
            min_horas = max_horas;
        }
        Some(Profesor {
            id: fila.texto(profesores::ID).to_string(),
            departamento: clasificadores.profesores.clasificar(&abrev).to_string(),
            abrev,
            max_horas,
            min_horas,
            email: fila.texto(profesores::EMAIL).to_string(),
            carga_actual: 0,
        })
    }
}

impl RegistroCsv for Asignacion {
    const ESQUEMA: EsquemaCampos = asignaciones::ESQUEMA;

    fn desde_fila(fila: &Fila, _clasificadores: &Clasificadores) -> Option<Self> {
        use asignaciones::*;
        Some(Asignacion {
            asignatura: fila.reparado(ASIGNATURA),
            profesor: fila.texto(PROFESOR).to_string(),
            codigo_grupo: fila.texto(GRUP).to_string(),
            turno: Turno::desde_codigo(fila.texto(TURNO)),
            nivel: fila.reparado(NIVEL),
            curso: fila.reparado(CURSO),
            grupo: fila.texto(GRUPO).to_string(),
            aula: fila.texto(AULA).to_string(),
            tarea: fila.reparado(TAREA),
            dia: fila.entero(DIA),
            hora: fila.entero(HORA),
            sesiones: fila.entero(SESIONES),
            marco: fila.texto(MARCO).to_string(),
            concierto: fila.texto(CONCIERTO).to_string(),
            alumnos: fila.entero(ALUMNOS),
        })
    }
}

impl RegistroCsv for Asignatura {
    const ESQUEMA: EsquemaCampos = asignaturas::ESQUEMA;

    fn desde_fila(fila: &Fila, clasificadores: &Clasificadores) -> Option<Self> {
        use asignaturas::*;
        let nombre = fila.reparado(NOMASIG);
        let codigo = fila.texto(ASIG);
        let codigo_grupo = fila.texto(GRUP);
        if nombre.is_empty() || codigo.is_empty() || codigo_grupo.is_empty() {
            return None;
        }
        Some(Asignatura {
            departamento: clasificadores.grupos.clasificar(codigo_grupo).to_string(),
            nombre,
            codigo: codigo.to_string(),
            codigo_grupo: codigo_grupo.to_string(),
            profesor: fila.texto(PROF).to_string(),
            turno: Turno::desde_codigo(fila.texto(TURNO)),
            nivel: fila.reparado(NIVEL),
            curso: fila.reparado(CURSO),
            grupo: fila.texto(GRUPO).to_string(),
            aula: fila.texto(AULA).to_string(),
            tarea: fila.reparado(TAREA),
            dia: fila.entero(DIA),
            hora: fila.entero(HORA),
            sesiones: fila.entero(SESIONES),
            marco: fila.texto(MARCO).to_string(),
            concierto: fila.texto(CONCIERTO).to_string(),
            alumnos: fila.entero(ALUMNOS),
        })
    }
}

impl RegistroCsv for Modulo {
    const ESQUEMA: EsquemaCampos = modulos::ESQUEMA;

    fn desde_fila(fila: &Fila, clasificadores: &Clasificadores) -> Option<Self> {
        let codigo_grupo = fila.reparado(modulos::ABREV);
        Some(Modulo {
            departamento: clasificadores.grupos.clasificar(&codigo_grupo).to_string(),
            curso: formatear_curso(fila.texto(modulos::CURSO)),
            turno: Turno::desde_codigo(fila.texto(modulos::TURNO)),
            descripcion: formatear_descripcion(fila.texto(modulos::DESCRIPCION)),
            tutor: fila.reparado(modulos::TUTOR),
            max_alumnos: fila.entero(modulos::MAX_ALUMNOS),
            codigo_grupo,
        })
    }

    /// Un módulo por código de grupo: se queda el primero que aparece.
    fn finalizar(registros: Vec<Self>) -> Vec<Self> {
        let mut vistos: HashSet<String> = HashSet::new();
        registros
            .into_iter()
            .filter(|m| vistos.insert(m.codigo_grupo.clone()))
            .collect()
    }
}

impl RegistroCsv for NombreAsignatura {
    const ESQUEMA: EsquemaCampos = nombres::ESQUEMA;

    fn desde_fila(fila: &Fila, _clasificadores: &Clasificadores) -> Option<Self> {
        Some(NombreAsignatura {
            id: fila.texto(nombres::ID).to_string(),
            codigo: fila.texto(nombres::ASIG).to_string(),
            nombre: fila.reparado(nombres::NOMBRE),
            departamento: fila.reparado(nombres::DEPARTAMENTO),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::filas_de;

    fn parsear<T: RegistroCsv>(texto: &str) -> Vec<T> {
        let c = Clasificadores::default();
        T::finalizar(filas_de(texto, &T::ESQUEMA).filter_map(|f| T::desde_fila(&f, &c)).collect())
    }

    #[test]
    fn profesor_posicional() {
        let texto = "N;ID;ABREV;MAX;MIN;DEP;X;Y;EMAIL;Z;W\n\
                     0;17;AE01;20;18;Otro;;;ana@centro.es;;\n";
        let v: Vec<Profesor> = parsear(texto);
        assert_eq!(v.len(), 1);
        let p = &v[0];
        assert_eq!(p.id, "17");
        assert_eq!(p.abrev, "AE01");
        assert_eq!((p.max_horas, p.min_horas), (20, 18));
        assert_eq!(p.departamento, "Administración y gestión");
        assert_eq!(p.email, "ana@centro.es");
        assert_eq!(p.carga_actual, 0);
    }

    #[test]
    fn profesor_minimo_ajustado_y_numeros_suaves() {
        let texto = "cab\n0;1;MM02;diez;5;;;;;;\n";
        let v: Vec<Profesor> = parsear(texto);
        assert_eq!((v[0].max_horas, v[0].min_horas), (0, 0));
    }

    #[test]
    fn asignacion_con_turno_y_sesiones() {
        let texto = "cab\nProgramaciÃ³n;ING01;1IFC;M;CFGS;1º;A;A12;Docencia;2;3;4;X;N;25\n";
        let v: Vec<Asignacion> = parsear(texto);
        assert_eq!(v[0].asignatura, "Programación");
        assert_eq!(v[0].profesor, "ING01");
        assert_eq!(v[0].turno, Some(Turno::Manana));
        assert_eq!((v[0].dia, v[0].hora, v[0].sesiones, v[0].alumnos), (2, 3, 4, 25));
    }

    #[test]
    fn asignatura_campos_opcionales_y_requeridos() {
        let texto = "NOMASIG;ASIG;GRUP;PROF\n\
                     Bases de datos;BD;1IFC31;INF02\n\
                     ;BD;1IFC31;INF02\n\
                     Sistemas;SI;2ADG;AE01;T;CFGM;2;B;A3;Doc;1;2;5;M;C;30\n";
        let v: Vec<Asignatura> = parsear(texto);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].departamento, "Informática y comunicaciones");
        assert_eq!(v[0].turno, None);
        assert_eq!(v[0].sesiones, 0);
        assert_eq!(v[1].departamento, "Administración y gestión");
        assert_eq!(v[1].turno, Some(Turno::Tarde));
        assert_eq!((v[1].sesiones, v[1].alumnos), (5, 30));
    }

    #[test]
    fn modulos_primero_gana() {
        let cab = "a;b;ABREV;TURNO;e;CURSO;g;MAXALUM;DESCRIP;TUTOR;k;l;m;n\n";
        let texto = format!(
            "{}0;0;1IFC31;M;x;Primer curso;x;30;1º desarrollo web;JosÃ©;;;;\n\
             0;0;1IFC31;T;x;2;x;25;otra descripción;Otro;;;;\n\
             0;0;2QUI;V;x;segundo;x;abc;-- química;Eva;;;;\n",
            cab
        );
        let v: Vec<Modulo> = parsear(&texto);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].codigo_grupo, "1IFC31");
        assert_eq!(v[0].descripcion, "Desarrollo web");
        assert_eq!(v[0].curso, "1");
        assert_eq!(v[0].tutor, "José");
        assert_eq!(v[0].turno, Some(Turno::Manana));
        assert_eq!(v[0].departamento, "Informática y comunicaciones");
        assert_eq!(v[1].curso, "2");
        assert_eq!(v[1].max_alumnos, 0);
        assert_eq!(v[1].descripcion, "Química");
        assert_eq!(v[1].departamento, "Química");
    }
}
