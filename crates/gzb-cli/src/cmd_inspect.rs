/// Implementation of `gzb inspect`.
///
/// Prints the embedded catalog one tier per line, with the numbers
/// that make the design legible at a glance: how many layers were
/// applied, how few bytes actually get stored and transmitted, and the
/// resulting expansion ratio.
///
/// # Example output
///
/// ```text
/// Tier    Rounds  Stored  Nominal         Ratio
/// 1k      1       29      1024            35:1
/// 10M     2       125     10485760        83886:1
/// 10G     4       446     10737418240     24075377:1
/// ```
///
/// With `--json` the same data is emitted as a JSON array for
/// scripting; `--show-hex` appends a hex dump of each stored blob
/// (they are all under a kilobyte, so the dumps stay short).
use std::fmt::Write as _;

use anyhow::Result;
use gzb_catalog::Catalog;
use gzb_response::ResponseBuilder;

use crate::InspectArgs;

/// One tier's row in the `--json` output.
#[derive(serde::Serialize)]
struct TierReport {
    label: &'static str,
    rounds: u32,
    stored_bytes: usize,
    nominal_bytes: u64,
    content_encoding: String,
}

/// Run the `gzb inspect` command.
///
/// # Errors
///
/// Only JSON serialization can fail, and only on a broken writer.
pub fn run(args: &InspectArgs) -> Result<()> {
    let catalog = Catalog::global();

    if args.json {
        let builder = ResponseBuilder::new();
        let rows: Vec<TierReport> = catalog
            .iter()
            .map(|(label, entry)| TierReport {
                label: label.as_str(),
                rounds: entry.rounds(),
                stored_bytes: entry.len(),
                nominal_bytes: label.nominal_bytes(),
                content_encoding: builder.build(label).content_encoding(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<8}{:<8}{:<8}{:<16}{}", "Tier", "Rounds", "Stored", "Nominal", "Ratio");
    for (label, entry) in catalog.iter() {
        let ratio = label.nominal_bytes() / entry.len() as u64;
        println!(
            "{:<8}{:<8}{:<8}{:<16}{}:1",
            label.as_str(),
            entry.rounds(),
            entry.len(),
            label.nominal_bytes(),
            ratio
        );

        if args.show_hex {
            for (i, chunk) in entry.data().chunks(16).enumerate() {
                let offset = i * 16;
                let hex: String =
                    chunk
                        .iter()
                        .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                            if !s.is_empty() {
                                s.push(' ');
                            }
                            let _ = write!(s, "{b:02x}");
                            s
                        });
                println!("        {offset:04x}  {hex}");
            }
        }
    }

    Ok(())
}
