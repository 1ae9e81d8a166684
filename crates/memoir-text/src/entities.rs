//! Named HTML character entity table.
//!
//! Covers the named entities that occur in entity-encoded prose: the
//! ampersand/angle/quote family, Latin-1 punctuation and letters, and
//! common typographic symbols. Names are matched case-sensitively, with
//! the handful of all-caps aliases HTML also defines. Numeric character
//! references are deliberately not handled — the upstream data never
//! contains them.

/// Decoded character for a named entity, or `None` if the name is unknown.
pub(crate) fn lookup(name: &str) -> Option<char> {
    let decoded = match name {
        // Markup characters
        "amp" | "AMP" => '&',
        "lt" | "LT" => '<',
        "gt" | "GT" => '>',
        "quot" | "QUOT" => '"',
        "apos" => '\'',

        // Latin-1 punctuation and symbols
        "nbsp" => '\u{a0}',
        "iexcl" => '¡',
        "cent" => '¢',
        "pound" => '£',
        "yen" => '¥',
        "sect" => '§',
        "copy" | "COPY" => '©',
        "laquo" => '«',
        "reg" | "REG" => '®',
        "deg" => '°',
        "plusmn" => '±',
        "micro" => 'µ',
        "para" => '¶',
        "middot" => '·',
        "raquo" => '»',
        "iquest" => '¿',
        "times" => '×',
        "divide" => '÷',

        // Latin-1 letters
        "agrave" => 'à',
        "aacute" => 'á',
        "acirc" => 'â',
        "atilde" => 'ã',
        "auml" => 'ä',
        "aring" => 'å',
        "aelig" => 'æ',
        "ccedil" => 'ç',
        "egrave" => 'è',
        "eacute" => 'é',
        "ecirc" => 'ê',
        "euml" => 'ë',
        "igrave" => 'ì',
        "iacute" => 'í',
        "icirc" => 'î',
        "iuml" => 'ï',
        "ntilde" => 'ñ',
        "ograve" => 'ò',
        "oacute" => 'ó',
        "ocirc" => 'ô',
        "otilde" => 'õ',
        "ouml" => 'ö',
        "oslash" => 'ø',
        "ugrave" => 'ù',
        "uacute" => 'ú',
        "ucirc" => 'û',
        "uuml" => 'ü',
        "yacute" => 'ý',
        "szlig" => 'ß',

        // Typography
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "bull" => '•',
        "hellip" => '…',
        "dagger" => '†',
        "permil" => '‰',
        "euro" => '€',
        "trade" => '™',
        "minus" => '−',

        // Solidus pair; bsol matters because its decoded form can start a
        // Unicode escape for the next rewrite pass.
        "sol" => '/',
        "bsol" => '\\',

        _ => return None,
    };
    Some(decoded)
}
