//! Lectura de texto delimitado por `;`.
//!
//! Submódulos:
//! - `esquema`: columnas con nombre de cada fichero (índice declarado una sola vez)
//!
//! El parser es puramente sintáctico: no sabe qué significa cada campo.

pub mod esquema;

pub use esquema::{Columna, EsquemaCampos};

use ::csv::{ReaderBuilder, StringRecord, Terminator};

use crate::texto::reparar_texto;

pub const DELIMITADOR: u8 = b';';

/// Devuelve las filas de datos de `texto` de forma perezosa.
///
/// Partición literal: sin comillas, sólo `\n` termina un registro (el `\r`
/// queda en el último campo). Se descartan las líneas en blanco y la
/// primera línea restante (cabecera). Las filas con menos de `min_campos`
/// campos se omiten sin error. Los campos no se recortan aquí.
pub fn filas<'a>(texto: &'a str, min_campos: usize) -> impl Iterator<Item = StringRecord> + use<'a> {
    ReaderBuilder::new()
        .delimiter(DELIMITADOR)
        .quoting(false)
        .flexible(true)
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(texto.as_bytes())
        .into_records()
        .filter_map(|resultado| match resultado {
            Ok(registro) => Some(registro),
            Err(e) => {
                tracing::warn!("⚠️  registro CSV ilegible, se omite: {}", e);
                None
            }
        })
        .filter(|registro| !en_blanco(registro))
        .skip(1)
        .filter(move |registro| registro.len() >= min_campos)
}

/// Línea vacía o sólo con espacios: un único campo sin contenido.
fn en_blanco(registro: &StringRecord) -> bool {
    registro.len() <= 1 && registro.get(0).is_none_or(|c| c.trim().is_empty())
}

/// Igual que `filas` pero envolviendo cada fila en `Fila`.
pub fn filas_de<'a>(texto: &'a str, esquema: &EsquemaCampos) -> impl Iterator<Item = Fila> + use<'a> {
    filas(texto, esquema.min_campos).map(Fila::new)
}

/// Fila ya separada, con acceso por columna.
#[derive(Debug, Clone)]
pub struct Fila {
    campos: StringRecord,
}

impl Fila {
    pub fn new(campos: StringRecord) -> Self {
        Fila { campos }
    }

    pub fn len(&self) -> usize {
        self.campos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campos.is_empty()
    }

    /// Campo recortado; vacío si la columna no existe en esta fila.
    pub fn texto(&self, columna: Columna) -> &str {
        self.campos.get(columna.indice).map(str::trim).unwrap_or("")
    }

    /// Campo pasado por la reparación de texto.
    pub fn reparado(&self, columna: Columna) -> String {
        reparar_texto(self.texto(columna))
    }

    /// Campo numérico; nunca falla (ver `entero_suave`).
    pub fn entero(&self, columna: Columna) -> u32 {
        entero_suave(self.texto(columna))
    }
}

/// Convierte a entero como lo haría un `parseInt`: espacios iniciales, signo
/// opcional y dígitos iniciales ("12h" → 12, "4.5" → 4). Sin dígitos o con
/// signo negativo devuelve 0; un valor demasiado grande se satura.
pub fn entero_suave(s: &str) -> u32 {
    let s = s.trim_start();
    let (negativo, digitos) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let fin = digitos.find(|c: char| !c.is_ascii_digit()).unwrap_or(digitos.len());
    if fin == 0 || negativo {
        return 0;
    }
    digitos[..fin].parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campos(texto: &str, min_campos: usize) -> Vec<Vec<String>> {
        filas(texto, min_campos)
            .map(|r| r.iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn salta_cabecera_y_lineas_en_blanco() {
        let texto = "\n  \nH1;H2\na;b\n\n c ; d \n";
        assert_eq!(campos(texto, 2), vec![vec!["a", "b"], vec![" c ", " d "]]);
    }

    #[test]
    fn filas_cortas_se_omiten() {
        let texto = "H1;H2;H3\nAE01;Jane;5\nTooShort;6\nMM02;Bob;7\n";
        let v = campos(texto, 3);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], vec!["AE01", "Jane", "5"]);
        assert_eq!(v[1], vec!["MM02", "Bob", "7"]);
    }

    #[test]
    fn texto_vacio_o_solo_cabecera() {
        assert_eq!(filas("", 1).count(), 0);
        assert_eq!(filas("A;B;C\n", 1).count(), 0);
        assert_eq!(filas(" \n\t\r\n", 1).count(), 0);
    }

    #[test]
    fn lineas_de_espacios_no_cuentan_como_cabecera() {
        let texto = "   \n\t\nH1;H2\nx;1\n";
        assert_eq!(campos(texto, 2), vec![vec!["x", "1"]]);
    }

    #[test]
    fn comillas_y_separadores_vacios_se_respetan() {
        let texto = "H\n\"a;b\";c\n;;\n";
        let v = campos(texto, 3);
        assert_eq!(v, vec![vec!["\"a", "b\"", "c"], vec!["", "", ""]]);
    }

    #[test]
    fn crlf_se_recorta_en_el_campo() {
        let texto = "A;B\r\nx;7\r\n";
        assert_eq!(campos(texto, 2), vec![vec!["x", "7\r"]]);
        let v: Vec<Fila> = filas(texto, 2).map(Fila::new).collect();
        let col = Columna::requerida("B", 1);
        assert_eq!(v[0].texto(col), "7");
        assert_eq!(v[0].entero(col), 7);
        assert_eq!(v[0].texto(Columna::opcional("C", 5)), "");
    }

    #[test]
    fn entero_suave_nunca_falla() {
        assert_eq!(entero_suave("12"), 12);
        assert_eq!(entero_suave("  7 "), 7);
        assert_eq!(entero_suave("12h"), 12);
        assert_eq!(entero_suave("4.5"), 4);
        assert_eq!(entero_suave("+3"), 3);
        assert_eq!(entero_suave("-3"), 0);
        assert_eq!(entero_suave("abc"), 0);
        assert_eq!(entero_suave(""), 0);
        assert_eq!(entero_suave("99999999999"), u32::MAX);
    }
}
