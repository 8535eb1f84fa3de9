use std::sync::LazyLock;

use bytes::Bytes;
use gzb_gzip::{FILLER_BYTE, decompress, member};

use crate::error::CatalogError;
use crate::label::SizeLabel;

/// Cap on any intermediate decompression layer during verification.
///
/// The largest intermediate is the 10G tier's innermost layer at about
/// 10.5 MiB; 64 MiB gives comfortable headroom while still turning a
/// corrupt blob into an error instead of a runaway allocation.
const LAYER_LIMIT: u64 = 64 * 1024 * 1024;

// One resource per tier, layered-compressed offline by `gzb gen`.
// The format is exactly "gzip applied `rounds` times", no framing.
static RAW: [&[u8]; 8] = [
    include_bytes!("../resources/1k.gz"),
    include_bytes!("../resources/10k.gz"),
    include_bytes!("../resources/100k.gz"),
    include_bytes!("../resources/1M.gz"),
    include_bytes!("../resources/10M.gz"),
    include_bytes!("../resources/100M.gz"),
    include_bytes!("../resources/1G.gz"),
    include_bytes!("../resources/10G.gz"),
];

/// One tier's payload: the layered-compressed bytes and the number of
/// gzip passes a client must undo to reach the nominal plaintext.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    rounds: u32,
    data: Bytes,
}

impl CatalogEntry {
    /// Number of sequential gzip passes applied when the blob was
    /// produced.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The stored compressed bytes. Cloning the returned handle is a
    /// reference-count bump, never a copy — the backing storage is the
    /// embedded resource itself.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Byte length of the stored blob (the on-wire length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// The process-wide payload table.
///
/// Populated at compile time from the embedded resources and exposed
/// as a shared static via [`Catalog::global`]. There is no mutation
/// path after construction, so any number of request handlers may read
/// it concurrently without synchronization.
///
/// Population is infallible (the resources are compiled in), but a
/// process must still call [`verify`](Self::verify) once at startup
/// and treat failure as fatal: serving from a catalog whose blobs do
/// not decode to their nominal sizes would emit responses whose
/// metadata lies to the client.
pub struct Catalog {
    entries: [CatalogEntry; 8],
}

impl Catalog {
    fn new() -> Self {
        let entries = SizeLabel::ALL.map(|label| CatalogEntry {
            rounds: label.rounds(),
            data: Bytes::from_static(RAW[label.index()]),
        });
        Self { entries }
    }

    /// The process-wide catalog instance.
    #[must_use]
    pub fn global() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::new);
        &CATALOG
    }

    /// Look up a tier by typed label. Total over [`SizeLabel`]; the
    /// returned reference is shared and read-only.
    #[must_use]
    pub fn lookup(&self, label: SizeLabel) -> &CatalogEntry {
        &self.entries[label.index()]
    }

    /// Look up a tier by its string label.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownSizeLabel`] for anything outside the
    /// enumerated set — never a fallback to a default tier.
    pub fn lookup_str(&self, label: &str) -> Result<&CatalogEntry, CatalogError> {
        let label: SizeLabel = label.parse()?;
        Ok(self.lookup(label))
    }

    /// All tiers in ascending nominal size, paired with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (SizeLabel, &CatalogEntry)> {
        SizeLabel::ALL.iter().map(move |&l| (l, self.lookup(l)))
    }

    /// Structural startup verification of every tier.
    ///
    /// Peels all but the innermost compression layer (every
    /// intermediate is small), then checks the innermost gzip member's
    /// magic and its ISIZE trailer against the tier's nominal size
    /// modulo 2³². Nothing larger than [`LAYER_LIMIT`] is ever
    /// materialized, so this is cheap enough to run on every boot.
    ///
    /// # Errors
    ///
    /// Any [`CatalogError`] here means the embedded resources are
    /// corrupt; the caller must abort startup rather than serve.
    pub fn verify(&self) -> Result<(), CatalogError> {
        for (label, entry) in self.iter() {
            verify_entry(label, entry.rounds(), entry.data())?;
        }
        Ok(())
    }

    /// Full verification: expands every tier completely (streamed, the
    /// plaintext is never held in memory) and checks both the exact
    /// nominal length and the uniform filler content.
    ///
    /// The 10G tier alone inflates 10 GiB of plaintext, so this
    /// belongs in `gzb verify --deep` and slow test runs, not in
    /// server startup.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`verify`](Self::verify), plus
    /// [`CatalogError::NominalSizeMismatch`] and
    /// [`CatalogError::FillerMismatch`].
    pub fn verify_deep(&self) -> Result<(), CatalogError> {
        for (label, entry) in self.iter() {
            verify_entry_deep(label, entry.rounds(), entry.data())?;
        }
        Ok(())
    }
}

/// Structural check of one tier's blob: peel the cheap outer layers,
/// then match the innermost member's ISIZE trailer against the tier's
/// nominal size modulo 2³².
fn verify_entry(label: SizeLabel, rounds: u32, data: &[u8]) -> Result<(), CatalogError> {
    let inner = peel_outer_layers(label, rounds, data)?;

    let expected = truncate_isize(label.nominal_bytes());
    let found = member::member_isize(&inner).map_err(|source| CatalogError::Layer {
        label,
        layer: rounds,
        rounds,
        source,
    })?;
    if found != expected {
        return Err(CatalogError::TrailerMismatch {
            label,
            found,
            expected,
        });
    }
    Ok(())
}

/// Deep check of one tier's blob: full streamed expansion with exact
/// length and uniform-filler validation.
fn verify_entry_deep(label: SizeLabel, rounds: u32, data: &[u8]) -> Result<(), CatalogError> {
    let inner = peel_outer_layers(label, rounds, data)?;

    let (actual, uniform) = decompress::decompressed_filler_len(&inner, FILLER_BYTE).map_err(
        |source| CatalogError::Layer {
            label,
            layer: rounds,
            rounds,
            source,
        },
    )?;

    if actual != label.nominal_bytes() {
        return Err(CatalogError::NominalSizeMismatch {
            label,
            actual,
            expected: label.nominal_bytes(),
        });
    }
    if !uniform {
        return Err(CatalogError::FillerMismatch { label });
    }
    Ok(())
}

/// Decode `rounds - 1` outer layers of a tier's blob, returning the
/// innermost (round-1) gzip member.
fn peel_outer_layers(label: SizeLabel, rounds: u32, data: &[u8]) -> Result<Vec<u8>, CatalogError> {
    let mut current = data.to_vec();
    for layer in 1..rounds {
        current =
            decompress::decompress_bounded(&current, LAYER_LIMIT).map_err(|source| {
                CatalogError::Layer {
                    label,
                    layer,
                    rounds,
                    source,
                }
            })?;
    }
    Ok(current)
}

/// The nominal size as it appears in a gzip ISIZE trailer.
fn truncate_isize(nominal: u64) -> u32 {
    u32::try_from(nominal % (1u64 << 32)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_is_populated() {
        let catalog = Catalog::global();
        for (label, entry) in catalog.iter() {
            assert!(!entry.is_empty(), "tier {label} has no data");
            assert_eq!(entry.rounds(), label.rounds());
        }
    }

    #[test]
    fn stored_blobs_are_orders_of_magnitude_below_nominal() {
        let catalog = Catalog::global();
        for (label, entry) in catalog.iter() {
            assert!(
                (entry.len() as u64) < label.nominal_bytes(),
                "tier {label}: stored {} bytes, nominal {}",
                entry.len(),
                label.nominal_bytes()
            );
            // Even the worst tier stays under a kilobyte on the wire.
            assert!(entry.len() < 1024, "tier {label} blob unexpectedly large");
        }
    }

    #[test]
    fn every_blob_starts_with_gzip_magic() {
        let catalog = Catalog::global();
        for (label, entry) in catalog.iter() {
            assert!(
                member::check_magic(entry.data()).is_ok(),
                "tier {label} is not a gzip member"
            );
        }
    }

    #[test]
    fn lookup_str_accepts_every_label() {
        let catalog = Catalog::global();
        for label in SizeLabel::ALL {
            assert!(catalog.lookup_str(label.as_str()).is_ok());
        }
    }

    #[test]
    fn lookup_str_rejects_unknown_labels() {
        let catalog = Catalog::global();
        for bad in ["", "10m", "1T", "10M ", "not-a-real-size"] {
            assert!(
                matches!(
                    catalog.lookup_str(bad),
                    Err(CatalogError::UnknownSizeLabel { .. })
                ),
                "label {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn structural_verification_passes() {
        Catalog::global().verify().expect("embedded catalog is sound");
    }

    #[test]
    fn lookup_is_deterministic() {
        let catalog = Catalog::global();
        let a = catalog.lookup(SizeLabel::M10);
        let b = catalog.lookup(SizeLabel::M10);
        assert_eq!(a.data(), b.data());
        assert_eq!(a.rounds(), b.rounds());
    }

    #[test]
    fn isize_truncation_for_the_10g_tier() {
        assert_eq!(truncate_isize(SizeLabel::G10.nominal_bytes()), 2_147_483_648);
        assert_eq!(truncate_isize(1024), 1024);
    }

    // Verification failure paths, driven with crafted blobs. The
    // embedded resources are always valid, so these feed
    // verify_entry/verify_entry_deep directly — the same functions
    // verify()/verify_deep() run per tier.

    use gzb_gzip::compress::{compress_zero_fill, recompress};

    #[test]
    fn truncated_outer_layer_fails_with_layer_context() {
        let valid = compress_zero_fill(SizeLabel::K100.nominal_bytes(), 2).unwrap();
        let truncated = &valid[..valid.len() / 2];

        let err = verify_entry(SizeLabel::K100, 2, truncated).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Layer {
                label: SizeLabel::K100,
                layer: 1,
                rounds: 2,
                ..
            }
        ));
    }

    #[test]
    fn short_garbage_fails_at_the_innermost_layer() {
        let err = verify_entry(SizeLabel::K1, 1, b"\x1f\x8b").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Layer {
                label: SizeLabel::K1,
                layer: 1,
                rounds: 1,
                ..
            }
        ));
    }

    #[test]
    fn wrong_nominal_size_fails_the_trailer_check() {
        // A perfectly valid gzip member — of the wrong plaintext size.
        let wrong = compress_zero_fill(100, 1).unwrap();

        let err = verify_entry(SizeLabel::K1, 1, &wrong).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TrailerMismatch {
                label: SizeLabel::K1,
                found: 100,
                expected: 1024,
            }
        ));
    }

    #[test]
    fn deep_check_rejects_a_short_expansion() {
        let short = compress_zero_fill(100, 1).unwrap();

        let err = verify_entry_deep(SizeLabel::K1, 1, &short).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::NominalSizeMismatch {
                label: SizeLabel::K1,
                actual: 100,
                expected: 1024,
            }
        ));
    }

    #[test]
    fn deep_check_rejects_non_filler_content() {
        // Right length, wrong bytes: 1024 × 0x41 instead of the filler.
        let foreign = recompress(&[0x41u8; 1024]).unwrap();

        let err = verify_entry_deep(SizeLabel::K1, 1, &foreign).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::FillerMismatch {
                label: SizeLabel::K1
            }
        ));
    }

    #[test]
    fn valid_crafted_entry_passes_both_checks() {
        // Sanity for the harness itself: a blob built the way `gen`
        // builds the real resources passes both verification depths.
        let blob = compress_zero_fill(SizeLabel::K1.nominal_bytes(), 1).unwrap();
        verify_entry(SizeLabel::K1, 1, &blob).unwrap();
        verify_entry_deep(SizeLabel::K1, 1, &blob).unwrap();
    }
}
