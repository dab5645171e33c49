//! Number to English words, for the range a clock face needs.

use crate::error::{Result, TimeError};

const SMALL: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

// Indexed by n / 10; slots 0 and 1 are covered by SMALL.
const TENS: [&str; 6] = ["", "", "twenty", "thirty", "forty", "fifty"];

/// Largest value [`number_to_words`] accepts.
pub const MAX_NUMBER: i32 = 59;

/// Spell out `n` in lowercase English words.
///
/// Values below twenty and whole tens come straight from the tables; every
/// other value is `"<tens> <ones>"`, e.g. `32` becomes `"thirty two"`.
pub fn number_to_words(n: i32) -> Result<String> {
    if !(0..=MAX_NUMBER).contains(&n) {
        return Err(TimeError::OutOfRange(n));
    }

    let n = n as usize;
    if n < 20 {
        return Ok(SMALL[n].to_string());
    }
    if n % 10 == 0 {
        return Ok(TENS[n / 10].to_string());
    }

    Ok(format!("{} {}", TENS[n / 10], SMALL[n % 10]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_words() {
        let cases = vec![
            (0, "zero"),
            (1, "one"),
            (7, "seven"),
            (12, "twelve"),
            (15, "fifteen"),
            (19, "nineteen"),
        ];

        for (n, expected) in cases {
            assert_eq!(number_to_words(n).unwrap(), expected, "Failed for {}", n);
        }
    }

    #[test]
    fn test_tens_words() {
        assert_eq!(number_to_words(20).unwrap(), "twenty");
        assert_eq!(number_to_words(30).unwrap(), "thirty");
        assert_eq!(number_to_words(40).unwrap(), "forty");
        assert_eq!(number_to_words(50).unwrap(), "fifty");
    }

    #[test]
    fn test_composite_words() {
        assert_eq!(number_to_words(21).unwrap(), "twenty one");
        assert_eq!(number_to_words(32).unwrap(), "thirty two");
        assert_eq!(number_to_words(45).unwrap(), "forty five");
        assert_eq!(number_to_words(59).unwrap(), "fifty nine");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(number_to_words(-1), Err(TimeError::OutOfRange(-1)));
        assert_eq!(number_to_words(60), Err(TimeError::OutOfRange(60)));
        assert_eq!(number_to_words(i32::MAX), Err(TimeError::OutOfRange(i32::MAX)));
    }

    proptest! {
        #[test]
        fn test_words_are_clean_lowercase(n in 0..=MAX_NUMBER) {
            let words = number_to_words(n).unwrap();
            prop_assert!(!words.is_empty());
            prop_assert_eq!(words.trim(), words.as_str());
            prop_assert_eq!(words.to_lowercase(), words.clone());

            let spaces = words.matches(' ').count();
            if n >= 20 && n % 10 != 0 {
                prop_assert_eq!(spaces, 1);
            } else {
                prop_assert_eq!(spaces, 0);
            }
        }

        #[test]
        fn test_values_outside_table_fail(n in prop_oneof![i32::MIN..0, 60..i32::MAX]) {
            prop_assert_eq!(number_to_words(n), Err(TimeError::OutOfRange(n)));
        }
    }
}
