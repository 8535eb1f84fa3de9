use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// The closed set of decompressed-size tiers the catalog serves.
///
/// Each label names a nominal decompressed size using binary
/// multipliers ("k" = 1024, "M" = 1024², "G" = 1024³) and carries a
/// fixed compression-round count chosen so the stored blob stays tiny:
/// once the round-1 output of a large zero run is itself small and
/// repetitive, another gzip pass shrinks it again.
///
/// ```text
/// ┌───────┬────────┬────────────────────┐
/// │ Label │ Rounds │ Nominal bytes      │
/// ├───────┼────────┼────────────────────┤
/// │ 1k    │ 1      │ 1 024              │
/// │ 10k   │ 1      │ 10 240             │
/// │ 100k  │ 2      │ 102 400            │
/// │ 1M    │ 2      │ 1 048 576          │
/// │ 10M   │ 2      │ 10 485 760         │
/// │ 100M  │ 3      │ 104 857 600        │
/// │ 1G    │ 3      │ 1 073 741 824      │
/// │ 10G   │ 4      │ 10 737 418 240     │
/// └───────┴────────┴────────────────────┘
/// ```
///
/// Parsing is exact-match only; anything outside this table is
/// [`CatalogError::UnknownSizeLabel`]. There is deliberately no
/// nearest-tier clamping and no fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeLabel {
    K1,
    K10,
    K100,
    M1,
    M10,
    M100,
    G1,
    G10,
}

impl SizeLabel {
    /// All tiers, in ascending nominal size. Table order and catalog
    /// storage order both follow this.
    pub const ALL: [SizeLabel; 8] = [
        Self::K1,
        Self::K10,
        Self::K100,
        Self::M1,
        Self::M10,
        Self::M100,
        Self::G1,
        Self::G10,
    ];

    /// The wire-facing label string, e.g. `"10M"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::K1 => "1k",
            Self::K10 => "10k",
            Self::K100 => "100k",
            Self::M1 => "1M",
            Self::M10 => "10M",
            Self::M100 => "100M",
            Self::G1 => "1G",
            Self::G10 => "10G",
        }
    }

    /// The exact decompressed byte count this tier expands to.
    #[must_use]
    pub fn nominal_bytes(self) -> u64 {
        const K: u64 = 1024;
        match self {
            Self::K1 => K,
            Self::K10 => 10 * K,
            Self::K100 => 100 * K,
            Self::M1 => K * K,
            Self::M10 => 10 * K * K,
            Self::M100 => 100 * K * K,
            Self::G1 => K * K * K,
            Self::G10 => 10 * K * K * K,
        }
    }

    /// Number of sequential gzip passes applied when the tier's blob
    /// was produced (and therefore the number a client must undo).
    #[must_use]
    pub fn rounds(self) -> u32 {
        match self {
            Self::K1 | Self::K10 => 1,
            Self::K100 | Self::M1 | Self::M10 => 2,
            Self::M100 | Self::G1 => 3,
            Self::G10 => 4,
        }
    }

    /// Position of this tier in [`SizeLabel::ALL`]; doubles as the
    /// catalog storage index.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::K1 => 0,
            Self::K10 => 1,
            Self::K100 => 2,
            Self::M1 => 3,
            Self::M10 => 4,
            Self::M100 => 5,
            Self::G1 => 6,
            Self::G10 => 7,
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeLabel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1k" => Ok(Self::K1),
            "10k" => Ok(Self::K10),
            "100k" => Ok(Self::K100),
            "1M" => Ok(Self::M1),
            "10M" => Ok(Self::M10),
            "100M" => Ok(Self::M100),
            "1G" => Ok(Self::G1),
            "10G" => Ok(Self::G10),
            other => Err(CatalogError::UnknownSizeLabel {
                label: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_labels_roundtrip_through_strings() {
        for label in SizeLabel::ALL {
            assert_eq!(label.as_str().parse::<SizeLabel>().unwrap(), label);
            assert_eq!(label.to_string(), label.as_str());
        }
    }

    #[test]
    fn indices_match_table_order() {
        for (i, label) in SizeLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn nominal_sizes_are_binary_multiples() {
        assert_eq!(SizeLabel::K1.nominal_bytes(), 1024);
        assert_eq!(SizeLabel::M10.nominal_bytes(), 10_485_760);
        assert_eq!(SizeLabel::G10.nominal_bytes(), 10_737_418_240);
    }

    #[test]
    fn rounds_grow_with_tier_size() {
        let rounds: Vec<u32> = SizeLabel::ALL.iter().map(|l| l.rounds()).collect();
        assert_eq!(rounds, [1, 1, 2, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("10m".parse::<SizeLabel>().is_err());
        assert!("1K".parse::<SizeLabel>().is_err());
    }

    #[test]
    fn unknown_label_carries_the_input() {
        let err = "17T".parse::<SizeLabel>().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownSizeLabel { ref label } if label == "17T"
        ));
    }
}
