//! Identifier-safe spelling of normalized predicates.
//!
//! Every character a normalized predicate can contain has a glyph that is
//! valid in an identifier, so the mapping is total and injective.

use crate::NormalPredicate;

/// Glyph for a single predicate character, or `None` if `c` cannot appear
/// in a normalized predicate.
///
/// `**` is spelled `ᕯ` and handled by [`to_identifier_parts`].
pub fn identifier_glyph(c: char) -> Option<char> {
    let glyph = match c {
        c if c.is_ascii_alphanumeric() => c,
        ' ' => 'ˑ',
        '/' => 'Ⳇ',
        '-' => 'ￚ',
        '.' => 'ˌ',
        ':' => 'ː',
        '<' => 'ᐸ',
        '>' => 'ᐳ',
        '@' => 'ဇ',
        '*' => 'ӿ',
        '|' => 'ǀ',
        '∅' => 'Ø',
        _ => return None,
    };
    Some(glyph)
}

/// Spell a normalized predicate using only identifier characters.
pub fn to_identifier_parts(predicate: NormalPredicate) -> String {
    let text = predicate.as_str();
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'*') {
            chars.next();
            out.push('ᕯ');
            continue;
        }
        match identifier_glyph(c) {
            Some(glyph) => out.push(glyph),
            None => {
                // Unreachable for parser-produced predicates
                tracing::warn!(predicate = text, %c, "no identifier glyph");
                out.push('_');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests;
