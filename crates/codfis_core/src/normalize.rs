//! Name normalization for encoding and place matching.
//!
//! # Responsibility
//! - Fold diacritics and case so lookups are accent-insensitive.
//! - Split normalized names into consonant and vowel sequences.
//!
//! # Invariants
//! - `slug` output only contains `[a-z0-9-]`, without leading, trailing or
//!   repeated `-`.
//! - `slug(slug(x)) == slug(x)`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes free text into a lowercase ASCII slug.
///
/// Runs of anything that is not an ASCII letter or digit collapse into a
/// single `-`.
pub fn slug(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        match fold_letter(c) {
            Some(replacement) => folded.push_str(replacement),
            None => folded.push(c),
        }
    }

    let mut slugged = String::with_capacity(folded.len());
    let mut pending_separator = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slugged.is_empty() {
                slugged.push('-');
            }
            pending_separator = false;
            slugged.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slugged
}

/// Letters that NFKD does not decompose into an ASCII base.
fn fold_letter(c: char) -> Option<&'static str> {
    let folded = match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'ł' => "l",
        'Ł' => "L",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        _ => return None,
    };
    Some(folded)
}

/// Consonants of a slug, in original order.
pub fn consonants(slugged: &str) -> Vec<char> {
    slugged
        .chars()
        .filter(|c| c.is_ascii_alphabetic() && !is_vowel(*c))
        .collect()
}

/// Vowels of a slug, in original order.
pub fn vowels(slugged: &str) -> Vec<char> {
    slugged.chars().filter(|c| is_vowel(*c)).collect()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
