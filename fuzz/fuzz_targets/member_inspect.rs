#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: RFC 1952 member inspection.
//
// Catches bugs in:
// - length checks before slicing the trailer
// - magic validation over arbitrary prefixes
fuzz_target!(|data: &[u8]| {
    let _ = gzb_gzip::member::check_magic(data);
    let _ = gzb_gzip::member::member_isize(data);
});
