//! Check character (CIN) computation.
//!
//! # Invariants
//! - Weights are the fixed tables of the standard, not derived values.
//! - Input is expected to be upper-case `[A-Z0-9]`; other characters weigh 0.

use crate::model::tax_code::{BODY_LEN, TAX_CODE_LEN};

/// Weights for characters at odd 1-based positions, digits `0-9`.
const ODD_DIGIT_WEIGHTS: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];
/// Weights for characters at odd 1-based positions, letters `A-Z`.
const ODD_LETTER_WEIGHTS: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

/// Computes the check character over the first 15 characters of `body`.
pub fn check_char(body: &str) -> char {
    let sum: u32 = body
        .chars()
        .take(BODY_LEN)
        .enumerate()
        .map(|(index, c)| {
            if index % 2 == 0 {
                odd_weight(c)
            } else {
                even_weight(c)
            }
        })
        .sum();
    char::from(b'A' + (sum % 26) as u8)
}

/// Returns whether the last character of a 16-character code matches its body.
pub fn verify(code: &str) -> bool {
    if code.chars().count() != TAX_CODE_LEN {
        return false;
    }
    code.chars().last() == Some(check_char(code))
}

fn odd_weight(c: char) -> u32 {
    match c {
        '0'..='9' => ODD_DIGIT_WEIGHTS[(c as u8 - b'0') as usize],
        'A'..='Z' => ODD_LETTER_WEIGHTS[(c as u8 - b'A') as usize],
        _ => 0,
    }
}

fn even_weight(c: char) -> u32 {
    match c {
        '0'..='9' => u32::from(c as u8 - b'0'),
        'A'..='Z' => u32::from(c as u8 - b'A'),
        _ => 0,
    }
}
