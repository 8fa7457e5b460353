use cargalectiva::agregacion::{con_carga_actual, filtrar, Filtro};
use cargalectiva::carga::parsear;
use cargalectiva::clasificacion::{politica_grupos, politica_profesores, Clasificador, Clasificadores};
use cargalectiva::csv::filas;
use cargalectiva::models::{Asignacion, Modulo, Profesor};
use cargalectiva::texto::reparar_texto;

#[test]
fn test_escenario_completo_parseo_y_clasificacion() {
    let texto = "H1;H2;H3\nAE01;Jane;5\nTooShort;6\nMM02;Bob;7\n";
    let registros: Vec<Vec<String>> = filas(texto, 3)
        .map(|r| r.iter().map(str::to_string).collect())
        .collect();
    assert_eq!(registros, vec![vec!["AE01", "Jane", "5"], vec!["MM02", "Bob", "7"]]);

    let clasificador = Clasificador::new(politica_profesores());
    assert_eq!(clasificador.clasificar(&registros[0][0]), "Administración y gestión");
    assert_eq!(clasificador.clasificar(&registros[1][0]), "Fabricación mecánica");
}

#[test]
fn test_carga_actual_suma_sesiones() {
    let clas = Clasificadores::default();
    let profesores: Vec<Profesor> = parsear("cab\n0;1;ING01;20;10;;;;ing01@centro.es;;\n", &clas);
    let asignaciones: Vec<Asignacion> = parsear(
        "cab\n\
         Inglés técnico;ING01;1IFC31;M;CFGS;1;A;A1;Docencia;1;1;4;;;20\n\
         Inglés técnico;ING01;2IFC31;T;CFGS;2;A;A1;Docencia;2;1;3;;;20\n\
         Matemáticas;MAT01;1IMA;M;CFGM;1;A;A2;Docencia;3;1;5;;;20\n",
        &clas,
    );
    let profesores = con_carga_actual(&profesores, &asignaciones);
    assert_eq!(profesores[0].carga_actual, 7);
}

#[test]
fn test_modulos_duplicados_primero_gana() {
    let texto = "a;b;ABREV;TURNO;e;CURSO;g;MAXALUM;DESCRIP;TUTOR;k;l;m;n\n\
                 1;x;1IFC31;M;x;1;x;30;Desarrollo de aplicaciones web;Ana;;;;\n\
                 2;x;1IFC31;M;x;1;x;30;Otra descripción;Luis;;;;\n\
                 3;x;corto;M\n";
    let modulos: Vec<Modulo> = parsear(texto, &Clasificadores::default());
    assert_eq!(modulos.len(), 1);
    assert_eq!(modulos[0].descripcion, "Desarrollo de aplicaciones web");
    assert_eq!(modulos[0].tutor, "Ana");
}

#[test]
fn test_reparacion_idempotente_y_filtro() {
    for entrada in ["Ã±o  &amp;  Dise&ntilde;o", "&#xF1;&#241;", "Â°C\u{1}\u{85}", "&ntil\u{1}de;"] {
        let una = reparar_texto(entrada);
        assert_eq!(reparar_texto(&una), una, "entrada {:?}", entrada);
    }

    let clas = Clasificadores::new(politica_profesores(), politica_grupos());
    let modulos: Vec<Modulo> = parsear(
        "cab\n\
         0;0;1IFC31;M;x;1;x;30;web;Ana;;;;\n\
         0;0;2ADG;T;x;2;x;30;gestión;Eva;;;;\n",
        &clas,
    );
    let filtro = Filtro {
        departamento: Some("Informática y comunicaciones".to_string()),
        turno: Some("all".to_string()),
        ..Filtro::default()
    };
    let r = filtrar(&modulos, &filtro);
    assert_eq!(r.len(), 1);
    assert_eq!(r[0].codigo_grupo, "1IFC31");
}
