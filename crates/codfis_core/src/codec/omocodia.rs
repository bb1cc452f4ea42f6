//! Omocodia substitution tables.
//!
//! # Responsibility
//! - Map digits to homograph letters and back.
//! - Enumerate substitution combinations over the omocodable positions.
//!
//! # Invariants
//! - The digit/letter tables are bijective.
//! - Combination order is stable: by subset size, then lexicographic.

/// Homograph letters for digits `0-9`.
pub const HOMOGRAPH_LETTERS: [char; 10] = ['L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V'];

/// Body positions that may hold a homograph letter instead of a digit.
pub const OMOCODABLE_INDEXES: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];

/// Maps a homograph letter back to its digit; digits pass through.
///
/// Characters outside both tables are returned unchanged.
pub fn decode_char(c: char) -> char {
    if c.is_ascii_digit() {
        return c;
    }
    HOMOGRAPH_LETTERS
        .iter()
        .position(|letter| *letter == c)
        .map(|digit| char::from(b'0' + digit as u8))
        .unwrap_or(c)
}

/// Maps a digit to its homograph letter; anything else passes through.
pub fn encode_char(c: char) -> char {
    match c.to_digit(10) {
        Some(digit) => HOMOGRAPH_LETTERS[digit as usize],
        None => c,
    }
}

/// All subsets of the omocodable positions, empty set included.
///
/// 128 entries, the empty set first.
pub fn all_substitution_combinations() -> Vec<Vec<usize>> {
    let mut combos = vec![Vec::new()];
    combos.extend(substitution_combinations());
    combos
}

/// The 127 non-empty subsets of the omocodable positions.
fn substitution_combinations() -> Vec<Vec<usize>> {
    let mut combos = Vec::with_capacity((1 << OMOCODABLE_INDEXES.len()) - 1);
    for size in 1..=OMOCODABLE_INDEXES.len() {
        push_combinations(&OMOCODABLE_INDEXES, size, &mut Vec::new(), &mut combos);
    }
    combos
}

fn push_combinations(
    pool: &[usize],
    size: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for (offset, index) in pool.iter().enumerate() {
        current.push(*index);
        push_combinations(&pool[offset + 1..], size, current, out);
        current.pop();
    }
}
