//! The three rewrite passes and their fixed composition.

use regex::{Captures, Regex};

use crate::entities;

/// Decode named HTML character entities to their literal characters.
///
/// Only `&name;` forms with ASCII-alpha names are matched; numeric
/// references pass through untouched, as does any name the table does not
/// know. Decoding is a single pass — an entity's decoded output is never
/// re-scanned for further entities.
pub fn decode_entities(input: &str) -> String {
    let entity_re = Regex::new(r"&([A-Za-z]+);").expect("Invalid entity regex");

    entity_re
        .replace_all(input, |caps: &Captures<'_>| match entities::lookup(&caps[1]) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Decode `\uXXXX` escape sequences (exactly 4 hex digits) to characters.
///
/// Sequences whose code point has no character (surrogates) are left
/// exactly as written.
pub fn decode_unicode_escapes(input: &str) -> String {
    let escape_re = Regex::new(r"\\u([0-9a-fA-F]{4})").expect("Invalid escape regex");

    escape_re
        .replace_all(input, |caps: &Captures<'_>| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(|c| c.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace the literal two-character `\n` marker with a `<br>` directive.
///
/// Actual newline characters are not touched.
pub fn render_line_breaks(input: &str) -> String {
    input.replace("\\n", "<br>")
}

/// Normalize a raw testimonial body for display.
///
/// Applies, in order: entity decoding, Unicode escape decoding, newline
/// marker rewriting. The order is fixed: entity decoding runs first
/// because an entity's decoded form can itself be the start of a Unicode
/// escape: `&bsol;u00e9` first becomes a backslash followed by `u00e9`,
/// which the second pass then decodes to `é`. This matches the dataset's
/// encoding history of entity-encoded text that was then JSON-escaped.
pub fn format_testimonial(raw: &str) -> String {
    render_line_breaks(&decode_unicode_escapes(&decode_entities(raw)))
}

// ============================================================================
// Tests
// ============================================================================
