#![warn(clippy::pedantic)]

//! Shared helpers for the integration tests and benches.

use gzb_catalog::CatalogEntry;
use gzb_gzip::GzipError;
use gzb_gzip::decompress::decompress_bounded;

/// Upper bound used when fully materializing a tier in a test. Only
/// the small tiers go through this path; the gigabyte tiers use the
/// streamed counters instead.
pub const TEST_LAYER_LIMIT: u64 = 256 * 1024 * 1024;

/// Decompress an entry's blob exactly `rounds` times and return the
/// final plaintext. This is precisely what a standards-compliant
/// client does with the declared encoding chain.
///
/// # Errors
///
/// Propagates any layer's [`GzipError`].
pub fn expand_fully(entry: &CatalogEntry) -> Result<Vec<u8>, GzipError> {
    let mut current = entry.data().to_vec();
    for _ in 0..entry.rounds() {
        current = decompress_bounded(&current, TEST_LAYER_LIMIT)?;
    }
    Ok(current)
}
