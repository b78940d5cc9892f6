//! Text encoding for PDF literal strings.
//!
//! The generated documents use the Base-14 Helvetica family with
//! WinAnsiEncoding, so every string shown on a page must be reduced to that
//! 8-bit encoding first. This module escapes the structural characters of
//! PDF literal strings and maps a fixed set of accented Latin letters and
//! typographic punctuation to WinAnsi octal escapes (or the nearest ASCII
//! fallback when WinAnsi has no slot). Characters outside the map pass
//! through untouched.

use std::collections::HashMap;

/// Fixed accent/punctuation table: source char, WinAnsi code point if one
/// exists, and the ASCII fallback used for width lookup (and for output when
/// there is no WinAnsi slot).
const ACCENT_MAP: &[(char, Option<u8>, &str)] = &[
    // Accented Latin letters (WinAnsi shares these positions with Latin-1)
    ('\u{e9}', Some(0xE9), "e"),  // é
    ('\u{e8}', Some(0xE8), "e"),  // è
    ('\u{ea}', Some(0xEA), "e"),  // ê
    ('\u{eb}', Some(0xEB), "e"),  // ë
    ('\u{e0}', Some(0xE0), "a"),  // à
    ('\u{e2}', Some(0xE2), "a"),  // â
    ('\u{e4}', Some(0xE4), "a"),  // ä
    ('\u{f9}', Some(0xF9), "u"),  // ù
    ('\u{fb}', Some(0xFB), "u"),  // û
    ('\u{fc}', Some(0xFC), "u"),  // ü
    ('\u{f4}', Some(0xF4), "o"),  // ô
    ('\u{ee}', Some(0xEE), "i"),  // î
    ('\u{ef}', Some(0xEF), "i"),  // ï
    ('\u{e7}', Some(0xE7), "c"),  // ç
    ('\u{c9}', Some(0xC9), "E"),  // É
    ('\u{c2}', Some(0xC2), "A"),  // Â
    // Ligatures without a WinAnsi slot fall back to two letters
    ('\u{153}', None, "oe"), // œ
    ('\u{e6}', None, "ae"),  // æ
    // Typographic punctuation
    ('\u{2018}', Some(0x91), "'"),    // left single quote
    ('\u{2019}', Some(0x92), "'"),    // right single quote
    ('\u{201c}', Some(0x93), "\""),   // left double quote
    ('\u{201d}', Some(0x94), "\""),   // right double quote
    ('\u{ab}', Some(0xAB), "\""),     // «
    ('\u{bb}', Some(0xBB), "\""),     // »
    ('\u{2013}', Some(0x96), "-"),    // en dash
    ('\u{2014}', Some(0x97), "-"),    // em dash
    ('\u{2026}', Some(0x85), "..."),  // ellipsis
];

lazy_static::lazy_static! {
    static ref ACCENTS: HashMap<char, (Option<u8>, &'static str)> = ACCENT_MAP
        .iter()
        .map(|&(ch, code, fallback)| (ch, (code, fallback)))
        .collect();
}

/// ASCII fallback for a mapped accented character, used for advance-width
/// lookup against the base glyph table. Returns `None` for unmapped chars.
pub fn ascii_fallback(ch: char) -> Option<&'static str> {
    ACCENTS.get(&ch).map(|&(_, fallback)| fallback)
}

/// Encode a string for inclusion in a PDF literal string `(...)`.
///
/// Escapes `\`, `(` and `)`, rewrites mapped characters as WinAnsi octal
/// escapes (or their ASCII fallback), and passes everything else through.
/// Deterministic and side-effect free.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => match ACCENTS.get(&ch) {
                Some(&(Some(code), _)) => {
                    out.push('\\');
                    out.push_str(&format!("{:03o}", code));
                },
                Some(&(None, fallback)) => out.push_str(fallback),
                None => out.push(ch),
            },
        }
    }
    out
}
