//! Reparación de texto corrupto procedente de los CSV.
//!
//! Categorías, en este orden:
//! 1. entidades HTML con nombre (`&ntilde;`)
//! 2. referencias numéricas (`&#241;`, `&#xF1;`)
//! 3. mojibake Latin-1/Windows-1252 (`Ã±`)
//! 4. caracteres de control C0 y C1
//! 5. espacios (colapsar y recortar)
//!
//! `reparar_texto` repite la secuencia hasta que el resultado no cambia, de
//! modo que la función es idempotente aunque una categoría posterior deje al
//! descubierto un patrón de una anterior.

pub mod tablas;

use tablas::{ENTIDADES_NOMBRADAS, MOJIBAKE};

/// Longitud máxima (en bytes) entre `&` y `;` que se considera referencia.
const MAX_REFERENCIA: usize = 10;

/// Limpia un texto para mostrarlo. Una entrada vacía devuelve cadena vacía.
pub fn reparar_texto(texto: &str) -> String {
    let mut actual = aplicar_categorias(texto);
    loop {
        let siguiente = aplicar_categorias(&actual);
        if siguiente == actual {
            return actual;
        }
        actual = siguiente;
    }
}

/// Variante para campos opcionales.
pub fn reparar_opcional(texto: Option<&str>) -> String {
    texto.map(reparar_texto).unwrap_or_default()
}

fn aplicar_categorias(texto: &str) -> String {
    let s = decodificar_entidades(texto);
    let s = decodificar_numericas(&s);
    let s = reparar_mojibake(&s);
    let s = quitar_controles(&s);
    normalizar_espacios(&s)
}

/// Sustituye entidades con nombre. Primero se busca el nombre exacto y, si
/// no existe, sin distinguir mayúsculas (`&NTILDE;` → `ñ`).
pub fn decodificar_entidades(texto: &str) -> String {
    reemplazar_referencias(texto, |nombre| {
        if nombre.starts_with('#') {
            return None;
        }
        ENTIDADES_NOMBRADAS
            .iter()
            .find(|(n, _)| *n == nombre)
            .or_else(|| ENTIDADES_NOMBRADAS.iter().find(|(n, _)| n.eq_ignore_ascii_case(nombre)))
            .map(|(_, c)| *c)
    })
}

/// Sustituye referencias numéricas decimales y hexadecimales. Los puntos de
/// código inválidos se dejan tal cual.
pub fn decodificar_numericas(texto: &str) -> String {
    reemplazar_referencias(texto, |nombre| {
        let cuerpo = nombre.strip_prefix('#')?;
        let valor = match cuerpo.strip_prefix(['x', 'X']) {
            Some(hex) if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            Some(_) => return None,
            None if !cuerpo.is_empty() && cuerpo.chars().all(|c| c.is_ascii_digit()) => {
                cuerpo.parse::<u32>().ok()?
            }
            None => return None,
        };
        char::from_u32(valor)
    })
}

/// Recorre `texto` buscando `&nombre;` y sustituye las referencias que
/// `decodificar` reconoce.
fn reemplazar_referencias(texto: &str, decodificar: impl Fn(&str) -> Option<char>) -> String {
    let mut salida = String::with_capacity(texto.len());
    let mut resto = texto;
    while let Some(pos) = resto.find('&') {
        salida.push_str(&resto[..pos]);
        let tras_amp = &resto[pos + 1..];
        let candidato = tras_amp
            .find(';')
            .filter(|fin| *fin > 0 && *fin <= MAX_REFERENCIA)
            .and_then(|fin| decodificar(&tras_amp[..fin]).map(|c| (c, fin)));
        match candidato {
            Some((c, fin)) => {
                salida.push(c);
                resto = &tras_amp[fin + 1..];
            }
            None => {
                salida.push('&');
                resto = tras_amp;
            }
        }
    }
    salida.push_str(resto);
    salida
}

/// Sustituye las secuencias de `MOJIBAKE` en una sola pasada de izquierda a
/// derecha.
pub fn reparar_mojibake(texto: &str) -> String {
    let mut salida = String::with_capacity(texto.len());
    let mut resto = texto;
    'exterior: while let Some(c) = resto.chars().next() {
        if c == 'Ã' || c == 'Â' || c == 'â' {
            for (patron, reemplazo) in MOJIBAKE {
                if let Some(tras) = resto.strip_prefix(patron) {
                    salida.push_str(reemplazo);
                    resto = tras;
                    continue 'exterior;
                }
            }
        }
        salida.push(c);
        resto = &resto[c.len_utf8()..];
    }
    salida
}

/// Elimina los caracteres de control C0 (U+0000–U+001F) y C1 (U+007F–U+009F).
pub fn quitar_controles(texto: &str) -> String {
    texto.chars().filter(|c| !es_control(*c)).collect()
}

fn es_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}

/// Colapsa cualquier racha de espacios en uno solo y recorta los extremos.
pub fn normalizar_espacios(texto: &str) -> String {
    texto.split_whitespace().collect::<Vec<_>>().join(" ")
}
