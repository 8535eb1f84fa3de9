/// Implementation of `gzb verify`.
///
/// Runs catalog verification and reports per-tier checkmarks (`✓`) or
/// a single diagnostic failure line (`✗`). Exit code 1 on any failure
/// (the dispatcher in `main.rs` converts `Err` to exit 1).
///
/// # Success output
///
/// ```text
/// ✓ 1k: 1 round, 29 bytes stored
/// ✓ 10k: 1 round, 45 bytes stored
/// ...
/// ✓ Catalog: all 8 tiers verified (structural)
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: tier 10M: layer 1 of 2 failed to decode: ...
/// ```
///
/// The structural pass checks what server startup checks; `--deep`
/// fully expands every tier with streamed counting, which is the
/// authoritative (and slow) form of property 1 from the catalog's
/// contract.
use anyhow::{Result, anyhow};
use gzb_catalog::Catalog;

use crate::VerifyArgs;

/// Run the `gzb verify` command.
///
/// # Errors
///
/// Returns an error when any tier fails verification.
pub fn run(args: &VerifyArgs) -> Result<()> {
    let catalog = Catalog::global();

    let result = if args.deep {
        catalog.verify_deep()
    } else {
        catalog.verify()
    };

    match result {
        Ok(()) => {
            for (label, entry) in catalog.iter() {
                println!(
                    "✓ {label}: {} round{}, {} bytes stored",
                    entry.rounds(),
                    if entry.rounds() == 1 { "" } else { "s" },
                    entry.len()
                );
            }
            println!(
                "✓ Catalog: all {} tiers verified ({})",
                catalog.iter().count(),
                if args.deep { "deep" } else { "structural" }
            );
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("catalog verification failed"))
        }
    }
}
