use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generators::{check_bounds, GeneratorError};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/~";
/// Characters that are easy to misread in most fonts.
const AMBIGUOUS: &str = "0Oo1lI";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// Character pools for every enabled class, ambiguous characters removed
    /// when requested.
    fn pools(&self) -> Vec<Vec<char>> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| {
            chars
                .chars()
                .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .collect()
        })
        .collect()
    }
}

/// Generates a password containing at least one character of every enabled class.
///
/// One character is drawn from each class first, the rest from the union of
/// all classes, and the result is shuffled so the guaranteed characters do
/// not sit at fixed positions.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    check_bounds("length", options.length, MIN_LENGTH, MAX_LENGTH)?;

    let pools = options.pools();
    if pools.is_empty() {
        return Err(GeneratorError::NoCharacterClasses);
    }

    let mut chars: Vec<char> = Vec::with_capacity(options.length);
    for pool in &pools {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }

    let all: Vec<char> = pools.concat();
    while chars.len() < options.length {
        if let Some(&c) = all.choose(rng) {
            chars.push(c);
        }
    }

    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

/// Rough strength label based on length and class variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

pub fn estimate_strength(password: &str) -> Strength {
    let classes = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    match (password.chars().count(), classes) {
        (len, c) if len >= 16 && c >= 3 => Strength::VeryStrong,
        (len, c) if len >= 12 && c >= 3 => Strength::Strong,
        (len, c) if len >= 8 && c >= 2 => Strength::Fair,
        _ => Strength::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_default_password_has_every_class() {
        let mut rng = rng();
        for _ in 0..50 {
            let pw = generate_password(&PasswordOptions::default(), &mut rng).unwrap();
            assert_eq!(pw.chars().count(), 16);
            assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pw.chars().any(|c| c.is_ascii_digit()));
            assert!(pw.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_minimum_length_with_all_classes() {
        let options = PasswordOptions {
            length: MIN_LENGTH,
            ..PasswordOptions::default()
        };
        let pw = generate_password(&options, &mut rng()).unwrap();
        assert_eq!(pw.len(), 4);
        assert!(pw.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_digits_only() {
        let options = PasswordOptions {
            length: 12,
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
            exclude_ambiguous: false,
        };
        let pw = generate_password(&options, &mut rng()).unwrap();
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_exclude_ambiguous_characters() {
        let options = PasswordOptions {
            length: MAX_LENGTH,
            exclude_ambiguous: true,
            ..PasswordOptions::default()
        };
        let mut rng = rng();
        for _ in 0..20 {
            let pw = generate_password(&options, &mut rng).unwrap();
            assert!(!pw.chars().any(|c| AMBIGUOUS.contains(c)), "{pw}");
        }
    }

    #[test]
    fn test_no_classes_is_error() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        assert_eq!(
            generate_password(&options, &mut rng()),
            Err(GeneratorError::NoCharacterClasses)
        );
    }

    #[test]
    fn test_length_bounds() {
        for length in [0, 3, 129] {
            let options = PasswordOptions {
                length,
                ..PasswordOptions::default()
            };
            assert!(matches!(
                generate_password(&options, &mut rng()),
                Err(GeneratorError::OutOfBounds { field: "length", .. })
            ));
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let a = generate_password(&PasswordOptions::default(), &mut StdRng::seed_from_u64(42));
        let b = generate_password(&PasswordOptions::default(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(estimate_strength("abc"), Strength::Weak);
        assert_eq!(estimate_strength("abcdefg1"), Strength::Fair);
        assert_eq!(estimate_strength("Abcdefghij12"), Strength::Strong);
        assert_eq!(estimate_strength("Abcdefghij12!@#$"), Strength::VeryStrong);
    }
}
