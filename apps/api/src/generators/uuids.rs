use serde::Deserialize;
use uuid::Uuid;

use crate::generators::{check_bounds, GeneratorError};

pub const MAX_UUIDS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidFormat {
    #[default]
    Hyphenated,
    Simple,
    Uppercase,
}

/// Generates `count` random (v4) UUIDs rendered in `format`.
pub fn generate_uuids(count: usize, format: UuidFormat) -> Result<Vec<String>, GeneratorError> {
    check_bounds("count", count, 1, MAX_UUIDS)?;

    Ok((0..count)
        .map(|_| {
            let id = Uuid::new_v4();
            match format {
                UuidFormat::Hyphenated => id.hyphenated().to_string(),
                UuidFormat::Simple => id.simple().to_string(),
                UuidFormat::Uppercase => id.hyphenated().to_string().to_ascii_uppercase(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_distinct_v4_uuids() {
        let ids = generate_uuids(10, UuidFormat::Hyphenated).unwrap();
        assert_eq!(ids.len(), 10);
        for id in &ids {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
        }
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_formats() {
        let simple = generate_uuids(1, UuidFormat::Simple).unwrap();
        assert_eq!(simple[0].len(), 32);
        assert!(!simple[0].contains('-'));

        let upper = generate_uuids(1, UuidFormat::Uppercase).unwrap();
        assert_eq!(upper[0].len(), 36);
        assert_eq!(upper[0], upper[0].to_ascii_uppercase());
    }

    #[test]
    fn test_count_bounds() {
        assert!(generate_uuids(0, UuidFormat::Hyphenated).is_err());
        assert!(generate_uuids(MAX_UUIDS + 1, UuidFormat::Hyphenated).is_err());
        assert_eq!(generate_uuids(MAX_UUIDS, UuidFormat::Simple).unwrap().len(), MAX_UUIDS);
    }
}
