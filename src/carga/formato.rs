//! Reglas de formato propias de los módulos (curso y descripción).

use crate::texto::reparar_texto;

/// Reduce el curso a "1", "2" o vacío buscando un dígito o el ordinal
/// escrito ("primer", "segundo") en el texto ya reparado.
pub fn formatear_curso(curso: &str) -> String {
    let limpio = reparar_texto(&curso.to_lowercase());
    if limpio.contains('1') || limpio.contains("primer") {
        "1".to_string()
    } else if limpio.contains('2') || limpio.contains("segundo") {
        "2".to_string()
    } else {
        String::new()
    }
}

/// Texto reparado a partir de la primera letra, con esa letra en mayúscula.
/// Si no hay ninguna letra se devuelve el texto reparado tal cual.
pub fn formatear_descripcion(descripcion: &str) -> String {
    let limpio = reparar_texto(descripcion);
    let Some((inicio, _)) = limpio.char_indices().find(|(_, c)| es_letra(*c)) else {
        return limpio;
    };
    let mut resto = limpio[inicio..].chars();
    let mut salida = String::with_capacity(limpio.len() - inicio);
    if let Some(primera) = resto.next() {
        salida.extend(primera.to_uppercase());
    }
    salida.push_str(resto.as_str());
    salida.trim().to_string()
}

// º y ª cuentan como alfabéticos en Unicode pero aquí son ruido ("1º")
fn es_letra(c: char) -> bool {
    c.is_alphabetic() && !matches!(c, 'º' | 'ª')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curso_por_digito_u_ordinal() {
        assert_eq!(formatear_curso("1º"), "1");
        assert_eq!(formatear_curso("Primer curso"), "1");
        assert_eq!(formatear_curso("PRIMERO"), "1");
        assert_eq!(formatear_curso("2&ordm;"), "2");
        assert_eq!(formatear_curso("Segundo"), "2");
        assert_eq!(formatear_curso("tercero"), "");
        assert_eq!(formatear_curso(""), "");
    }

    #[test]
    fn descripcion_desde_primera_letra() {
        assert_eq!(formatear_descripcion("1º - desarrollo web"), "Desarrollo web");
        assert_eq!(formatear_descripcion("  -- álgebra"), "Álgebra");
        assert_eq!(formatear_descripcion("inform&aacute;tica"), "Informática");
        assert_eq!(formatear_descripcion("ÃºLTIMO"), "ÚLTIMO");
        assert_eq!(formatear_descripcion("123"), "123");
        assert_eq!(formatear_descripcion(""), "");
    }
}
