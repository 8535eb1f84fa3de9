use gzb_gzip::GzipError;

use crate::label::SizeLabel;

/// Errors from catalog lookup and verification.
///
/// The two groups have very different lifecycles:
/// `UnknownSizeLabel` is a per-request, recoverable condition that the
/// HTTP layer maps to a client error status; everything else comes out
/// of [`Catalog::verify`](crate::Catalog::verify) and is fatal at
/// startup — a process must not serve from a catalog that failed
/// verification.
///
/// Error hierarchy:
///
/// ```text
///   CatalogError
///   ├── UnknownSizeLabel     ← request-time, recoverable (→ 404/400)
///   ├── Layer(GzipError)     ← a layer failed to decode (startup)
///   ├── TrailerMismatch      ← inner ISIZE ≠ nominal mod 2³² (startup)
///   ├── NominalSizeMismatch  ← deep expansion length wrong (startup)
///   └── FillerMismatch       ← deep expansion not uniform (startup)
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested label is not one of the eight enumerated tiers.
    /// Never silently substituted with a default.
    #[error("unknown size label {label:?}: expected one of 1k|10k|100k|1M|10M|100M|1G|10G")]
    UnknownSizeLabel { label: String },

    /// A compression layer of a tier's blob failed to decode during
    /// verification.
    #[error("tier {label}: layer {layer} of {rounds} failed to decode: {source}")]
    Layer {
        label: SizeLabel,
        /// 1-based, counted from the outermost (stored) layer.
        layer: u32,
        rounds: u32,
        #[source]
        source: GzipError,
    },

    /// The innermost gzip member's ISIZE trailer disagrees with the
    /// tier's nominal size (modulo 2³²).
    #[error("tier {label}: inner trailer declares {found} bytes, expected {expected} (mod 2^32)")]
    TrailerMismatch {
        label: SizeLabel,
        found: u32,
        expected: u32,
    },

    /// Deep verification expanded the tier to the wrong length.
    #[error("tier {label}: expanded to {actual} bytes, expected {expected}")]
    NominalSizeMismatch {
        label: SizeLabel,
        actual: u64,
        expected: u64,
    },

    /// Deep verification found a byte that is not the filler value.
    #[error("tier {label}: expanded content is not uniform filler")]
    FillerMismatch { label: SizeLabel },
}
