#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: bounded single-pass decompression.
//
// Catches bugs in:
// - the output cap (must never allocate past the limit)
// - flate2 error propagation for garbage / truncated members
// - the streamed counters agreeing with the materializing path
fuzz_target!(|data: &[u8]| {
    const LIMIT: u64 = 1 << 20;

    let materialized = gzb_gzip::decompress::decompress_bounded(data, LIMIT);
    if let Ok(out) = &materialized {
        assert!(out.len() as u64 <= LIMIT);
        // The streamed counter must agree on well-formed input.
        let counted = gzb_gzip::decompress::decompressed_len(data).unwrap();
        assert_eq!(counted, out.len() as u64);
    }
});
