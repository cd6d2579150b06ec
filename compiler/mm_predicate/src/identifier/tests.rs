#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::to_normal_predicate;

fn ident(pattern: &str) -> String {
    let normal = to_normal_predicate(pattern).expect("valid predicate");
    to_identifier_parts(normal)
}

#[test]
fn golden_identifiers() {
    let table = [
        ("abcdefghijklm", "abcdefghijklm"),
        ("NOPQRSTUVWXYZ", "NOPQRSTUVWXYZ"),
        ("0123456789", "0123456789"),
        (" /-.:<>@", "ˑⳆￚˌːᐸᐳဇ"),
        ("", ""),
        ("∅", "Ø"),
        ("/", "Ⳇ"),
        ("*", "ӿ"),
        ("**", "ᕯ"),
        ("a|b", "aǀb"),
        ("/api/foo/BAR", "ⳆapiⳆfooⳆBAR"),
        ("/api/foo**", "ⳆapiⳆfooᕯ"),
        ("/api/foo/{**rest}", "ⳆapiⳆfooⳆᕯ"),
        ("/api/{foO}O", "ⳆapiⳆӿO"),
        ("foo*|*oops", "ӿoopsǀfooӿ"),
        ("*|aaa", "ӿ"),
        ("|", ""),
        ("def|abc", "abcǀdef"),
        ("def|abc|DEF|123", "123ǀDEFǀabcǀdef"),
        ("foo*/bar|fo**/*z", "foᕯⳆӿzǀfooӿⳆbar"),
        ("abc|abc", "abc"),
        ("**|*|**", "ᕯ"),
        ("a*|a*|B*", "Bӿǀaӿ"),
        ("a*|abc*d|aa*", "aӿ"),
        ("a*|*a", "ӿaǀaӿ"),
        ("foo*/bar|fo**/*", "foᕯⳆӿ"),
        ("/**/{name}.{ext}", "ⳆᕯⳆӿˌӿ"),
        ("/{**aPath}/{name}.{ext}", "ⳆᕯⳆӿˌӿ"),
        ("/-/./-", "ⳆￚⳆˌⳆￚ"),
        ("//", "ⳆⳆ"),
        ("{$}", "ӿ"),
        ("{**__}", "ᕯ"),
        ("**.", "ᕯˌ"),
        ("GET /foo", "GETˑⳆfoo"),
        ("{method} {**path}", "ӿˑᕯ"),
        ("GET   /foo", "GETˑˑˑⳆfoo"),
        ("   GET /foo", "ˑˑˑGETˑⳆfoo"),
        ("   /   ", "ˑˑˑⳆˑˑˑ"),
    ];
    for (pattern, expected) in table {
        assert_eq!(ident(pattern), expected, "identifier for {pattern:?}");
    }
}

#[test]
fn invalid_predicates_have_no_identifier() {
    for c in "`~!$%^&()=+[]\\;'\",?ᕯáßδᵀऔݵͿ𝟜Ⅳ﹍§∫©".chars() {
        let pattern = format!("a{c}");
        assert!(to_normal_predicate(&pattern).is_err(), "{pattern:?} should be rejected");
    }
}

#[test]
fn every_literal_char_has_a_glyph() {
    for c in (0u8..128).map(char::from).filter(|&c| crate::is_literal_char(c)) {
        let glyph = identifier_glyph(c).unwrap();
        assert!(glyph.is_alphanumeric() || !glyph.is_ascii(), "{c:?} -> {glyph:?}");
    }
}

#[test]
fn glyphs_are_distinct() {
    let specials = " /-.:<>@*|∅";
    let mut glyphs: Vec<char> = specials.chars().filter_map(identifier_glyph).collect();
    glyphs.push('ᕯ');
    let count = glyphs.len();
    glyphs.sort_unstable();
    glyphs.dedup();
    assert_eq!(glyphs.len(), count);
}
