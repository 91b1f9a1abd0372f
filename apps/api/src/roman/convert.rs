//! Roman numeral converter (1 through 3999, standard subtractive notation).

use serde::Serialize;
use thiserror::Error;

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 3999;

const SYMBOLS: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    #[error("{0} is outside the convertible range {MIN_VALUE}-{MAX_VALUE}")]
    OutOfRange(u64),

    #[error("input is empty")]
    Empty,

    #[error("'{0}' is not a Roman numeral symbol")]
    InvalidSymbol(char),

    #[error("'{0}' is not a canonical Roman numeral")]
    NonCanonical(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToRoman,
    FromRoman,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanConversion {
    pub input: String,
    pub output: String,
    pub direction: Direction,
}

pub fn to_roman(value: u32) -> Result<String, RomanError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
        return Err(RomanError::OutOfRange(u64::from(value)));
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(amount, symbol) in SYMBOLS {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    Ok(out)
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parses a numeral case-insensitively.
///
/// Only canonical spellings are accepted: the value is re-encoded and must
/// match the input, which rejects forms like `IIII`, `VX` or `MMMM`.
pub fn from_roman(input: &str) -> Result<u32, RomanError> {
    let numeral = input.trim().to_ascii_uppercase();
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }

    let values = numeral
        .chars()
        .map(|c| symbol_value(c).ok_or(RomanError::InvalidSymbol(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut total: u32 = 0;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total = total.wrapping_sub(value),
            _ => total = total.wrapping_add(value),
        }
    }

    match to_roman(total) {
        Ok(canonical) if canonical == numeral => Ok(total),
        _ => Err(RomanError::NonCanonical(numeral)),
    }
}

/// Converts in whichever direction the input implies: digits go to a numeral,
/// anything else is parsed as a numeral.
pub fn convert(input: &str) -> Result<RomanConversion, RomanError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RomanError::Empty);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        let value: u64 = trimmed
            .parse()
            .map_err(|_| RomanError::OutOfRange(u64::MAX))?;
        let value = u32::try_from(value).map_err(|_| RomanError::OutOfRange(value))?;
        Ok(RomanConversion {
            input: trimmed.to_string(),
            output: to_roman(value)?,
            direction: Direction::ToRoman,
        })
    } else {
        Ok(RomanConversion {
            input: trimmed.to_string(),
            output: from_roman(trimmed)?.to_string(),
            direction: Direction::FromRoman,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_known_values() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(4).unwrap(), "IV");
        assert_eq!(to_roman(9).unwrap(), "IX");
        assert_eq!(to_roman(14).unwrap(), "XIV");
        assert_eq!(to_roman(1994).unwrap(), "MCMXCIV");
        assert_eq!(to_roman(2024).unwrap(), "MMXXIV");
        assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_to_roman_rejects_out_of_range() {
        assert_eq!(to_roman(0), Err(RomanError::OutOfRange(0)));
        assert_eq!(to_roman(4000), Err(RomanError::OutOfRange(4000)));
    }

    #[test]
    fn test_from_roman_is_case_insensitive() {
        assert_eq!(from_roman("mcmxciv").unwrap(), 1994);
        assert_eq!(from_roman(" XlII ").unwrap(), 42);
    }

    #[test]
    fn test_from_roman_rejects_non_canonical() {
        for bad in ["IIII", "VX", "IC", "MMMM", "XXXX", "VV"] {
            assert!(
                matches!(from_roman(bad), Err(RomanError::NonCanonical(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_roman_rejects_bad_symbols() {
        assert_eq!(from_roman("XIZ"), Err(RomanError::InvalidSymbol('Z')));
        assert_eq!(from_roman("   "), Err(RomanError::Empty));
    }

    #[test]
    fn test_convert_detects_direction() {
        let forward = convert("2024").unwrap();
        assert_eq!(forward.direction, Direction::ToRoman);
        assert_eq!(forward.output, "MMXXIV");

        let backward = convert("mmxxiv").unwrap();
        assert_eq!(backward.direction, Direction::FromRoman);
        assert_eq!(backward.output, "2024");
    }

    #[test]
    fn test_convert_huge_number_is_out_of_range() {
        assert!(matches!(
            convert("99999999999"),
            Err(RomanError::OutOfRange(_))
        ));
        assert!(matches!(
            convert("999999999999999999999999"),
            Err(RomanError::OutOfRange(_))
        ));
    }
}
