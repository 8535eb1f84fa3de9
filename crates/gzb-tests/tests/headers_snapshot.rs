//! Snapshot of the per-tier header values.
//!
//! This pins the exact on-wire metadata for every tier. Any change to
//! the embedded resources or the round table shows up here as a
//! snapshot diff before it ever reaches a client.

use std::fmt::Write as _;

use gzb_catalog::SizeLabel;
use gzb_response::ResponseBuilder;

#[test]
fn tier_header_values_are_stable() {
    let builder = ResponseBuilder::new();

    let mut table = String::new();
    for (i, label) in SizeLabel::ALL.iter().enumerate() {
        let response = builder.build(*label);
        if i > 0 {
            table.push('\n');
        }
        let _ = write!(
            table,
            "{label}: Content-Encoding: {} | Content-Length: {}",
            response.content_encoding(),
            response.content_length()
        );
    }

    insta::assert_snapshot!("tier_headers", table);
}
