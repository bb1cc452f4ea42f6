//! Month letter table.

use time::Month;

/// Letters for January..December.
pub const MONTH_LETTERS: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Letter for a calendar month.
pub fn month_letter(month: Month) -> char {
    MONTH_LETTERS[usize::from(u8::from(month)) - 1]
}

/// 1-based month for a letter.
pub fn month_number(letter: char) -> Option<u8> {
    MONTH_LETTERS
        .iter()
        .position(|candidate| *candidate == letter)
        .map(|index| index as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::{month_letter, month_number};
    use time::Month;

    #[test]
    fn maps_months_both_ways() {
        assert_eq!(month_letter(Month::January), 'A');
        assert_eq!(month_letter(Month::June), 'H');
        assert_eq!(month_letter(Month::December), 'T');

        let mut month = Month::January;
        for number in 1..=12u8 {
            assert_eq!(month_number(month_letter(month)), Some(number));
            month = month.next();
        }
        assert_eq!(month_number('F'), None);
    }
}
