#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: size label parsing + builder entry point.
//
// Catches bugs in:
// - FromStr over arbitrary (possibly non-UTF-8) input
// - error path never constructing a partial response
// - default substitution only firing for an absent label
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<gzb_catalog::SizeLabel>();
        let builder = gzb_response::ResponseBuilder::new();
        if let Ok(response) = builder.build_str(Some(s)) {
            // Anything that parses must produce coherent metadata.
            assert_eq!(response.content_length(), response.body().len());
            assert_eq!(
                response.encoding_chain().len() as u32,
                response.label().rounds()
            );
        }
    }
});
