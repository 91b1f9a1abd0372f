//! Random generators: passwords, UUIDs and lorem-ipsum placeholder text.
//!
//! Each generator takes its randomness as a `rand::Rng` argument so tests can
//! run against a seeded `StdRng`.

pub mod handlers;
pub mod lorem;
pub mod password;
pub mod uuids;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("{field} must be between {min} and {max} (got {given})")]
    OutOfBounds {
        field: &'static str,
        min: usize,
        max: usize,
        given: usize,
    },

    #[error("at least one character class must be enabled")]
    NoCharacterClasses,
}

/// Checks `given` against an inclusive range, naming the field in the error.
pub(crate) fn check_bounds(
    field: &'static str,
    given: usize,
    min: usize,
    max: usize,
) -> Result<(), GeneratorError> {
    if (min..=max).contains(&given) {
        Ok(())
    } else {
        Err(GeneratorError::OutOfBounds {
            field,
            min,
            max,
            given,
        })
    }
}
