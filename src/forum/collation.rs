//! Turkish-locale string collation.
//!
//! Labels are compared level by level: base letters first, then accents,
//! then case. Turkish dotted and dotless `i` are separate letters and fold
//! case the Turkish way (`I` -> `ı`, `İ` -> `i`). `ç ğ ö ş ü` are letters of
//! their own; every other accented letter is decomposed (NFD) and sorts with
//! its base letter, the marks only breaking ties.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

const TURKISH_ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'ö',
    'p', 'q', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'w', 'x', 'y', 'z',
];

/// Latin letters that have no canonical decomposition.
const EXPANSIONS: [(char, &str); 7] = [
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ø', "o"),
    ('đ', "d"),
    ('ł', "l"),
    ('ħ', "h"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Symbol,
    Digit,
    Letter,
    OtherLetter,
}

#[derive(Debug, Clone, Copy)]
struct CollationKey {
    primary: (CharClass, u32),
    secondary: u32,
    tertiary: u8,
}

fn turkish_lowercase(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn letter_index(c: char) -> Option<u32> {
    TURKISH_ALPHABET
        .iter()
        .position(|&l| l == c)
        .map(|idx| idx as u32)
}

fn base_primary(base: char) -> (CharClass, u32) {
    if base.is_whitespace() {
        (CharClass::Whitespace, 0)
    } else if let Some(d) = base.to_digit(10) {
        (CharClass::Digit, d)
    } else if let Some(idx) = letter_index(base) {
        (CharClass::Letter, idx)
    } else if base.is_alphabetic() {
        (CharClass::OtherLetter, base as u32)
    } else {
        (CharClass::Symbol, base as u32)
    }
}

fn push_keys(c: char, keys: &mut Vec<CollationKey>) {
    let lower = turkish_lowercase(c);
    let tertiary = u8::from(lower != c);

    if let Some(idx) = letter_index(lower) {
        keys.push(CollationKey {
            primary: (CharClass::Letter, idx),
            secondary: 0,
            tertiary,
        });
        return;
    }

    if let Some((_, expansion)) = EXPANSIONS.iter().find(|(from, _)| *from == lower) {
        for base in expansion.chars() {
            keys.push(CollationKey {
                primary: base_primary(base),
                secondary: lower as u32,
                tertiary,
            });
        }
        return;
    }

    let mut decomposed = std::iter::once(lower).nfd();
    let base = decomposed.next().unwrap_or(lower);
    let secondary = decomposed.next().map_or(0, |mark| mark as u32);

    keys.push(CollationKey {
        primary: base_primary(base),
        secondary,
        tertiary,
    });
}

fn collation_keys(s: &str) -> Vec<CollationKey> {
    let mut keys = Vec::with_capacity(s.len());
    for c in s.chars() {
        push_keys(c, &mut keys);
    }
    keys
}

/// Compares two labels using Turkish alphabetical order.
///
/// Distinct strings never compare `Equal`; when every collation level ties
/// the raw code points decide.
pub fn compare_tr(a: &str, b: &str) -> Ordering {
    let ka = collation_keys(a);
    let kb = collation_keys(b);

    let primary = ka.iter().map(|k| k.primary).cmp(kb.iter().map(|k| k.primary));
    let secondary = || ka.iter().map(|k| k.secondary).cmp(kb.iter().map(|k| k.secondary));
    let tertiary = || ka.iter().map(|k| k.tertiary).cmp(kb.iter().map(|k| k.tertiary));

    primary
        .then_with(secondary)
        .then_with(tertiary)
        .then_with(|| a.cmp(b))
}
