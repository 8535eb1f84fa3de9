/// Implementation of `gzb headers`.
///
/// Prints the exact header values a response for the given tier
/// carries, one per line, in `Name: value` form:
///
/// ```text
/// $ gzb headers 1M
/// Content-Encoding: gzip,gzip
/// Content-Length: 60
/// ```
///
/// Useful when wiring the catalog into an external server, or to
/// sanity-check what a client is about to be told to decompress.
use anyhow::Result;
use gzb_response::ResponseBuilder;

use crate::HeadersArgs;

/// Run the `gzb headers` command.
///
/// # Errors
///
/// Returns an error for a label outside the enumerated set.
pub fn run(args: &HeadersArgs) -> Result<()> {
    let response = ResponseBuilder::new().build_str(Some(&args.label))?;
    for (name, value) in response.headers() {
        println!("{name}: {value}");
    }
    Ok(())
}
