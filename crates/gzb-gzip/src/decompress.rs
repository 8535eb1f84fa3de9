use std::io::{self, Read, Write};

use flate2::read::GzDecoder;

use crate::error::GzipError;

/// Decompress one gzip pass with an output cap.
///
/// Reads at most `limit` output bytes; if the member would expand
/// further, [`GzipError::OutputLimitExceeded`] is returned instead of
/// the oversized allocation. All intermediate layers of a catalog blob
/// are far below any sane cap, so hitting it means the input is
/// corrupt or foreign.
///
/// # Errors
///
/// - [`GzipError::OutputLimitExceeded`] if the output grows past `limit`.
/// - [`GzipError::Io`] for truncated or malformed deflate data.
pub fn decompress_bounded(data: &[u8], limit: u64) -> Result<Vec<u8>, GzipError> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    // Read one byte past the cap so an exactly-at-limit output is
    // distinguishable from an over-limit one. Saturating: a caller
    // passing u64::MAX just gets an unbounded read.
    decoder
        .by_ref()
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)?;
    if out.len() as u64 > limit {
        return Err(GzipError::OutputLimitExceeded { limit });
    }
    Ok(out)
}

/// Stream one gzip pass to a counting sink and report the decompressed
/// length without retaining the output.
///
/// This is how the innermost layer of the large tiers is measured: the
/// 10G tier expands to 10 GiB, which must never be held in memory.
///
/// # Errors
///
/// Returns [`GzipError::Io`] for truncated or malformed deflate data.
pub fn decompressed_len(data: &[u8]) -> Result<u64, GzipError> {
    let mut decoder = GzDecoder::new(data);
    Ok(io::copy(&mut decoder, &mut io::sink())?)
}

/// Stream one gzip pass, counting output bytes and checking that every
/// byte equals `filler`.
///
/// Returns `(length, uniform)` where `uniform` is false if any output
/// byte differed from `filler`. Used by deep catalog verification.
///
/// # Errors
///
/// Returns [`GzipError::Io`] for truncated or malformed deflate data.
pub fn decompressed_filler_len(data: &[u8], filler: u8) -> Result<(u64, bool), GzipError> {
    let mut decoder = GzDecoder::new(data);
    let mut sink = FillerSink {
        filler,
        count: 0,
        uniform: true,
    };
    io::copy(&mut decoder, &mut sink)?;
    Ok((sink.count, sink.uniform))
}

/// `Write` sink that counts bytes and tracks whether all of them match
/// a single filler value.
struct FillerSink {
    filler: u8,
    count: u64,
    uniform: bool,
}

impl Write for FillerSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len() as u64;
        if self.uniform && buf.iter().any(|&b| b != self.filler) {
            self.uniform = false;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
