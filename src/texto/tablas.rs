//! Tablas de reparación de texto.
//!
//! Son datos: el orden dentro de cada tabla es el orden de prioridad.

/// Entidades HTML con nombre (sin `&` ni `;`).
///
/// Las minúsculas van antes que su variante en mayúscula: la búsqueda
/// insensible a mayúsculas se queda con la primera coincidencia.
pub const ENTIDADES_NOMBRADAS: &[(&str, char)] = &[
    ("ntilde", 'ñ'),
    ("Ntilde", 'Ñ'),
    ("aacute", 'á'),
    ("eacute", 'é'),
    ("iacute", 'í'),
    ("oacute", 'ó'),
    ("uacute", 'ú'),
    ("Aacute", 'Á'),
    ("Eacute", 'É'),
    ("Iacute", 'Í'),
    ("Oacute", 'Ó'),
    ("Uacute", 'Ú'),
    ("uuml", 'ü'),
    ("Uuml", 'Ü'),
    ("ccedil", 'ç'),
    ("Ccedil", 'Ç'),
    ("agrave", 'à'),
    ("egrave", 'è'),
    ("ograve", 'ò'),
    ("Agrave", 'À'),
    ("Egrave", 'È'),
    ("Ograve", 'Ò'),
    ("iuml", 'ï'),
    ("Iuml", 'Ï'),
    ("ordm", 'º'),
    ("ordf", 'ª'),
    ("deg", '°'),
    ("iquest", '¿'),
    ("iexcl", '¡'),
    ("middot", '·'),
    ("euro", '€'),
    ("nbsp", '\u{a0}'),
    ("quot", '"'),
    ("apos", '\''),
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
];

/// Secuencias UTF-8 de dos bytes leídas como Latin-1 o Windows-1252.
///
/// Para las mayúsculas el segundo byte cae en 0x80–0x9F: Latin-1 lo deja
/// como carácter C1 y Windows-1252 lo convierte en puntuación, así que
/// figuran las dos formas.
pub const MOJIBAKE: &[(&str, &str)] = &[
    ("Ã±", "ñ"),
    ("Ã\u{91}", "Ñ"),
    ("Ã\u{2018}", "Ñ"),
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã\u{ad}", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã\u{81}", "Á"),
    ("Ã\u{89}", "É"),
    ("Ã\u{2030}", "É"),
    ("Ã\u{8d}", "Í"),
    ("Ã\u{93}", "Ó"),
    ("Ã\u{201c}", "Ó"),
    ("Ã\u{9a}", "Ú"),
    ("Ã\u{161}", "Ú"),
    ("Ã¼", "ü"),
    ("Ã\u{9c}", "Ü"),
    ("Ã\u{153}", "Ü"),
    ("Ã§", "ç"),
    ("Ã\u{87}", "Ç"),
    ("Ã\u{2021}", "Ç"),
    ("Ã\u{a0}", "à"),
    ("Ã¨", "è"),
    ("Ã²", "ò"),
    ("Ã\u{80}", "À"),
    ("Ã\u{20ac}", "À"),
    ("Ã\u{88}", "È"),
    ("Ã\u{2c6}", "È"),
    ("Ã\u{92}", "Ò"),
    ("Ã\u{2019}", "Ò"),
    ("Ã¯", "ï"),
    ("Ã\u{8f}", "Ï"),
    // En los ficheros del centro "1Â°" quiere decir "1º"
    ("Â°", "º"),
    ("Âº", "º"),
    ("Âª", "ª"),
    ("Â¿", "¿"),
    ("Â¡", "¡"),
    ("Â·", "·"),
    ("Â\u{a0}", " "),
    ("â\u{201a}¬", "€"),
];
