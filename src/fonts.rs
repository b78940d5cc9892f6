//! Font metrics and text measurement.
//!
//! The report uses the Helvetica family only, so metrics are a single fixed
//! table of standard PostScript advance widths in 1/1000 em units. Bold text
//! is measured by scaling the regular advances with a fixed factor rather
//! than carrying a second table; the error is well under the slack the
//! layout leaves at line ends. Accented characters are measured through
//! their accent-stripped base form.

use crate::encoding;
use std::collections::HashMap;

/// Width multiplier applied to bold text.
pub const BOLD_FACTOR: f32 = 1.06;

/// Advance width used for glyphs missing from the table.
const DEFAULT_WIDTH: f32 = 500.0;

lazy_static::lazy_static! {
    /// Standard Helvetica advance widths, 1/1000 em units.
    static ref GLYPH_WIDTHS: HashMap<char, f32> = build_widths();
}

fn build_widths() -> HashMap<char, f32> {
    let mut widths = HashMap::new();

    // Whitespace and punctuation
    let punct: &[(char, f32)] = &[
        (' ', 278.0),
        ('!', 333.0),
        ('"', 400.0),
        ('#', 556.0),
        ('$', 556.0),
        ('%', 889.0),
        ('&', 722.0),
        ('\'', 222.0),
        ('(', 333.0),
        (')', 333.0),
        ('*', 389.0),
        ('+', 584.0),
        (',', 278.0),
        ('-', 333.0),
        ('.', 278.0),
        ('/', 278.0),
        (':', 278.0),
        (';', 278.0),
        ('<', 584.0),
        ('=', 584.0),
        ('>', 584.0),
        ('?', 500.0),
        ('@', 800.0),
        ('[', 333.0),
        ('\\', 278.0),
        (']', 333.0),
        ('^', 500.0),
        ('_', 556.0),
        ('`', 333.0),
        ('{', 333.0),
        ('|', 280.0),
        ('}', 333.0),
        ('~', 584.0),
    ];
    widths.extend(punct.iter().copied());

    for digit in '0'..='9' {
        widths.insert(digit, 556.0);
    }

    let uppercase: &[(char, f32)] = &[
        ('A', 722.0),
        ('B', 722.0),
        ('C', 722.0),
        ('D', 722.0),
        ('E', 667.0),
        ('F', 611.0),
        ('G', 778.0),
        ('H', 722.0),
        ('I', 278.0),
        ('J', 556.0),
        ('K', 722.0),
        ('L', 611.0),
        ('M', 833.0),
        ('N', 722.0),
        ('O', 778.0),
        ('P', 667.0),
        ('Q', 778.0),
        ('R', 722.0),
        ('S', 667.0),
        ('T', 611.0),
        ('U', 722.0),
        ('V', 667.0),
        ('W', 944.0),
        ('X', 667.0),
        ('Y', 667.0),
        ('Z', 611.0),
    ];
    widths.extend(uppercase.iter().copied());

    let lowercase: &[(char, f32)] = &[
        ('a', 556.0),
        ('b', 611.0),
        ('c', 556.0),
        ('d', 611.0),
        ('e', 556.0),
        ('f', 278.0),
        ('g', 611.0),
        ('h', 611.0),
        ('i', 222.0),
        ('j', 222.0),
        ('k', 556.0),
        ('l', 222.0),
        ('m', 833.0),
        ('n', 611.0),
        ('o', 611.0),
        ('p', 611.0),
        ('q', 611.0),
        ('r', 389.0),
        ('s', 556.0),
        ('t', 333.0),
        ('u', 611.0),
        ('v', 556.0),
        ('w', 778.0),
        ('x', 556.0),
        ('y', 556.0),
        ('z', 500.0),
    ];
    widths.extend(lowercase.iter().copied());

    widths
}

/// Advance in 1/1000 em units for one character, accent-stripped.
fn advance_units(ch: char) -> f32 {
    if let Some(w) = GLYPH_WIDTHS.get(&ch) {
        return *w;
    }
    // Accented characters are measured through their ASCII fallback, which
    // may be more than one glyph (œ -> "oe").
    if let Some(base) = encoding::ascii_fallback(ch) {
        return base
            .chars()
            .map(|c| GLYPH_WIDTHS.get(&c).copied().unwrap_or(DEFAULT_WIDTH))
            .sum();
    }
    DEFAULT_WIDTH
}

/// Width of a single character in points at the given size.
pub fn char_width(ch: char, size: f32, bold: bool) -> f32 {
    let factor = if bold { BOLD_FACTOR } else { 1.0 };
    advance_units(ch) * size / 1000.0 * factor
}

/// Width of a string in points at the given size.
pub fn string_width(text: &str, size: f32, bold: bool) -> f32 {
    text.chars().map(|c| char_width(c, size, bold)).sum()
}

/// Greedy word wrap against a width budget in points.
///
/// Splits on whitespace and appends words while the measured line still
/// fits. A single word wider than the budget is placed alone on its own
/// line; words are never split. Empty input yields no lines.
pub fn wrap(text: &str, max_width: f32, size: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;
    let space_width = char_width(' ', size, bold);

    for word in text.split_whitespace() {
        let word_width = string_width(word, size, bold);

        if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(current);
            current = word.to_string();
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_proportional_variance() {
        // 'i' is narrower than 'W' in Helvetica
        assert!(char_width('i', 12.0, false) < char_width('W', 12.0, false));
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = string_width("Hello", 12.0, false);
        let bold = string_width("Hello", 12.0, true);
        assert!(bold > regular);
        assert!((bold - regular * BOLD_FACTOR).abs() < 0.001);
    }

    #[test]
    fn test_unknown_glyph_uses_default() {
        // Emoji fall back to the default advance instead of failing.
        assert!((char_width('\u{1f436}', 10.0, false) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_accented_char_measured_via_base() {
        assert!((char_width('\u{e9}', 12.0, false) - char_width('e', 12.0, false)).abs() < 0.001);
        // Ligature œ measures as "oe"
        let oe = char_width('o', 12.0, false) + char_width('e', 12.0, false);
        assert!((char_width('\u{153}', 12.0, false) - oe).abs() < 0.001);
    }

    #[test]
    fn test_string_width_sums_chars() {
        let total = string_width("ab", 10.0, false);
        let parts = char_width('a', 10.0, false) + char_width('b', 10.0, false);
        assert!((total - parts).abs() < 0.001);
    }

    #[test]
    fn test_wrap_empty_is_empty() {
        assert!(wrap("", 100.0, 10.0, false).is_empty());
        assert!(wrap("   ", 100.0, 10.0, false).is_empty());
    }

    #[test]
    fn test_wrap_fits_budget() {
        let lines = wrap("The quick brown fox jumps over the lazy dog", 100.0, 12.0, false);
        assert!(lines.len() > 1);
        for line in &lines {
            let w = string_width(line, 12.0, false);
            assert!(w <= 100.0 || line.split_whitespace().count() == 1);
        }
    }

    #[test]
    fn test_oversized_word_stands_alone() {
        let lines = wrap("a incomprehensibilities b", 40.0, 12.0, false);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
        // The wide word was not split mid-word.
        assert!(lines.iter().all(|l| !l.contains('-')));
    }

    proptest! {
        #[test]
        fn prop_wrap_nonempty_yields_lines(text in "[a-zA-Z ]{1,200}", budget in 30.0f32..400.0) {
            if !text.trim().is_empty() {
                let lines = wrap(&text, budget, 10.0, false);
                prop_assert!(!lines.is_empty());
                for line in &lines {
                    let fits = string_width(line, 10.0, false) <= budget;
                    let single = line.split_whitespace().count() == 1;
                    prop_assert!(fits || single);
                }
            }
        }

        #[test]
        fn prop_wrap_preserves_words(text in "[a-z]{1,12}( [a-z]{1,12}){0,30}") {
            let rejoined = wrap(&text, 120.0, 10.0, false).join(" ");
            prop_assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
}
