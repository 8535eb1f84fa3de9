use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::FILLER_BYTE;
use crate::error::GzipError;

/// Chunk size for streaming the zero-fill plaintext through the
/// encoder. The full plaintext of the largest tier is 10 GiB and must
/// never be materialized.
const FILL_CHUNK: usize = 8 * 1024 * 1024;

/// Produce a layered gzip blob that expands to `nominal` filler bytes
/// after exactly `rounds` decompression passes.
///
/// Pass 1 streams `nominal` copies of [`FILLER_BYTE`] through a gzip
/// encoder at maximum compression; every further pass recompresses the
/// previous pass's output whole. Peak memory is one [`FILL_CHUNK`] plus
/// the (small) compressed output of the current pass.
///
/// This is the offline generation path behind `gzb gen`; the serving
/// path never compresses anything.
///
/// # Errors
///
/// Returns [`GzipError::Io`] if any encoder stream fails.
pub fn compress_zero_fill(nominal: u64, rounds: u32) -> Result<Vec<u8>, GzipError> {
    debug_assert!(rounds >= 1, "a blob has at least one compression round");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    let zeros = vec![FILLER_BYTE; FILL_CHUNK];
    let mut remaining = nominal;
    while remaining > 0 {
        let n = usize::try_from(remaining.min(FILL_CHUNK as u64)).unwrap_or(FILL_CHUNK);
        encoder.write_all(&zeros[..n])?;
        remaining -= n as u64;
    }
    let mut data = encoder.finish()?;

    for _ in 1..rounds {
        data = recompress(&data)?;
    }
    Ok(data)
}

/// Apply one further gzip round to an already-compressed blob.
///
/// # Errors
///
/// Returns [`GzipError::Io`] if the encoder stream fails.
pub fn recompress(data: &[u8]) -> Result<Vec<u8>, GzipError> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 64), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress::decompress_bounded;

    #[test]
    fn single_round_expands_to_nominal() {
        let blob = compress_zero_fill(4096, 1).unwrap();
        assert!(blob.len() < 4096, "zeros must compress");
        let plain = decompress_bounded(&blob, 1 << 20).unwrap();
        assert_eq!(plain.len(), 4096);
        assert!(plain.iter().all(|&b| b == FILLER_BYTE));
    }

    #[test]
    fn three_rounds_unwind_in_order() {
        let blob = compress_zero_fill(256 * 1024, 3).unwrap();
        let layer2 = decompress_bounded(&blob, 1 << 20).unwrap();
        let layer1 = decompress_bounded(&layer2, 1 << 20).unwrap();
        let plain = decompress_bounded(&layer1, 1 << 20).unwrap();
        assert_eq!(plain.len(), 256 * 1024);
        assert!(plain.iter().all(|&b| b == FILLER_BYTE));
    }

    #[test]
    fn zero_length_fill_is_valid() {
        // An empty plaintext still produces a complete gzip member.
        let blob = compress_zero_fill(0, 1).unwrap();
        let plain = decompress_bounded(&blob, 1024).unwrap();
        assert!(plain.is_empty());
    }

    #[test]
    fn recompress_roundtrips() {
        let inner = compress_zero_fill(1024, 1).unwrap();
        let outer = recompress(&inner).unwrap();
        assert_eq!(decompress_bounded(&outer, 1 << 20).unwrap(), inner);
    }
}
