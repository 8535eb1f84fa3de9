/// Implementation of `gzb gen`.
///
/// The offline production step: for each tier, stream the nominal
/// count of filler bytes through a gzip encoder at maximum compression
/// and recompress the result until the tier's round count is reached.
/// The output files carry no framing beyond the gzip layers themselves
/// — they are exactly what the catalog embeds and what goes on the
/// wire.
///
/// Peak memory stays at one fill chunk regardless of tier: the 10 GiB
/// plaintext of the largest tier is produced and consumed as a stream.
use std::fs;
use std::str::FromStr;

use anyhow::{Context, Result};
use gzb_catalog::SizeLabel;
use gzb_gzip::compress::compress_zero_fill;

use crate::GenArgs;

/// Run the `gzb gen` command.
///
/// Writes one `<label>.gz` file per tier (or just the `--only` tier)
/// into the output directory, printing a summary line for each.
///
/// # Errors
///
/// Returns an error for an unknown `--only` label, a failed encoder
/// stream, or an unwritable output directory.
pub fn run(args: &GenArgs) -> Result<()> {
    fs::create_dir_all(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;

    let tiers: Vec<SizeLabel> = match &args.only {
        Some(s) => vec![SizeLabel::from_str(s)?],
        None => SizeLabel::ALL.to_vec(),
    };

    for label in tiers {
        let blob = compress_zero_fill(label.nominal_bytes(), label.rounds())
            .with_context(|| format!("tier {label}: compression failed"))?;

        let path = args.output.join(format!("{label}.gz"));
        fs::write(&path, &blob)
            .with_context(|| format!("cannot write {}", path.display()))?;

        println!(
            "{label:>5}: {} bytes stored, {} rounds, {} bytes nominal",
            blob.len(),
            label.rounds(),
            label.nominal_bytes()
        );
    }

    Ok(())
}
