//! RFC 1952 gzip member inspection.
//!
//! Cheap structural checks that never inflate anything: the two magic
//! bytes up front and the ISIZE trailer at the end. Startup
//! verification leans on these for the innermost (huge) layer, where a
//! full decompression would be prohibitively expensive.

use crate::error::GzipError;

/// Size of the fixed gzip member header (RFC 1952 §2.3).
pub const HEADER_SIZE: usize = 10;

/// Size of the CRC32 + ISIZE trailer.
pub const TRAILER_SIZE: usize = 8;

/// First magic byte of a gzip member.
pub const MAGIC_0: u8 = 0x1F;

/// Second magic byte of a gzip member.
pub const MAGIC_1: u8 = 0x8B;

/// Validate the fixed header magic of a gzip member.
///
/// # Errors
///
/// - [`GzipError::TruncatedMember`] if `data` is shorter than a minimal
///   member (header + trailer).
/// - [`GzipError::BadMagic`] if the first two bytes are wrong.
pub fn check_magic(data: &[u8]) -> Result<(), GzipError> {
    if data.len() < HEADER_SIZE + TRAILER_SIZE {
        return Err(GzipError::TruncatedMember { len: data.len() });
    }
    if data[0] != MAGIC_0 || data[1] != MAGIC_1 {
        return Err(GzipError::BadMagic {
            found: (u16::from(data[0]) << 8) | u16::from(data[1]),
        });
    }
    Ok(())
}

/// Read the ISIZE field — the decompressed length modulo 2³² — from a
/// gzip member's trailer (last four bytes, little-endian).
///
/// Only meaningful for single-member blobs, which is the only shape
/// the catalog ever produces or stores.
///
/// # Errors
///
/// Same conditions as [`check_magic`].
pub fn member_isize(data: &[u8]) -> Result<u32, GzipError> {
    check_magic(data)?;
    let trailer = &data[data.len() - 4..];
    Ok(u32::from_le_bytes([
        trailer[0], trailer[1], trailer[2], trailer[3],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::compress_zero_fill;

    #[test]
    fn isize_matches_plaintext_length() {
        let blob = compress_zero_fill(10240, 1).unwrap();
        assert_eq!(member_isize(&blob).unwrap(), 10240);
    }

    #[test]
    fn isize_wraps_modulo_2_32() {
        // Not worth a 4 GiB fixture; the wrap arithmetic itself is what
        // the catalog relies on for the 10G tier.
        let nominal: u64 = 10 * 1024 * 1024 * 1024;
        assert_eq!(nominal % (1 << 32), 2_147_483_648);
    }

    #[test]
    fn short_input_is_truncated() {
        assert!(matches!(
            check_magic(&[0x1F, 0x8B, 0x08]),
            Err(GzipError::TruncatedMember { len: 3 })
        ));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let data = [0u8; 32];
        assert!(matches!(
            check_magic(&data),
            Err(GzipError::BadMagic { found: 0x0000 })
        ));
    }
}
