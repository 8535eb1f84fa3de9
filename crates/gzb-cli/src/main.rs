/// gzb command-line tool — generate, verify, inspect, and serve the
/// precomputed gzip-bomb payload catalog.
///
/// # Command overview
///
/// ```text
/// gzb <COMMAND> [OPTIONS]
///
/// Commands:
///   gen       Regenerate the layered payload resource files
///   verify    Check every catalog tier for structural correctness
///   inspect   Print a per-tier table of the embedded catalog
///   headers   Print the response header values for one tier
///   serve     Run the demo HTTP responder
///   help      Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (corrupt catalog, bad label, I/O, …)  |
///
/// Error details go to stderr so stdout pipes cleanly.
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_gen;
mod cmd_headers;
mod cmd_inspect;
mod cmd_serve;
mod cmd_verify;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The gzip-bomb catalog command-line tool.
#[derive(Parser)]
#[command(name = "gzb", version, about = "Gzip-bomb payload catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the layered payload resource files.
    Gen(GenArgs),
    /// Check every catalog tier for structural correctness.
    Verify(VerifyArgs),
    /// Print a per-tier table of the embedded catalog.
    Inspect(InspectArgs),
    /// Print the response header values for one tier.
    Headers(HeadersArgs),
    /// Run the demo HTTP responder.
    Serve(ServeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `gzb gen`.
///
/// Regenerates the eight resource files the catalog embeds — the
/// offline half of the system. Each tier streams its nominal count of
/// filler bytes through a gzip encoder and recompresses the output
/// until the tier's round count is reached. The files land as
/// `<label>.gz` in the output directory (point it at
/// `crates/gzb-catalog/resources` and rebuild to refresh the embedded
/// copies).
#[derive(clap::Args)]
pub struct GenArgs {
    /// Directory to write the generated `<label>.gz` files into.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Generate only this tier instead of all eight.
    #[arg(long)]
    pub only: Option<String>,
}

/// Arguments for `gzb verify`.
///
/// Runs catalog verification and prints one checkmark line per tier.
/// The default structural pass peels the cheap outer layers and checks
/// the innermost gzip member's trailer; `--deep` additionally expands
/// every tier completely with streamed counting.
///
/// ```text
/// ┌────────┬─────────────────────────────────────────────────────────┐
/// │ Flag   │ Effect                                                  │
/// ├────────┼─────────────────────────────────────────────────────────┤
/// │ --deep │ Full expansion of all tiers (the 10G tier inflates      │
/// │        │ 10 GiB of plaintext through the counter — slow)         │
/// └────────┴─────────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Fully expand every tier and check length and filler content.
    #[arg(long)]
    pub deep: bool,
}

/// Arguments for `gzb inspect`.
///
/// Prints one line per tier: rounds, stored size, nominal size, and
/// the expansion ratio.
///
/// ```text
/// ┌────────────┬────────────────────────────────────────────────────┐
/// │ Flag       │ Effect                                             │
/// ├────────────┼────────────────────────────────────────────────────┤
/// │ --json     │ Machine-readable JSON array instead of the table   │
/// │ --show-hex │ Hex dump of each stored blob (16 bytes per line)   │
/// └────────────┴────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Emit a JSON array instead of the human-readable table.
    #[arg(long)]
    pub json: bool,

    /// Show a raw hex dump of each stored blob.
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `gzb headers`.
///
/// Prints the exact `Content-Encoding` and `Content-Length` values a
/// response for the given tier carries — handy for wiring the catalog
/// into an external server or for curl-side debugging.
#[derive(clap::Args)]
pub struct HeadersArgs {
    /// Size label (1k|10k|100k|1M|10M|100M|1G|10G).
    pub label: String,
}

/// Arguments for `gzb serve`.
///
/// Runs the demo HTTP/1.1 responder. The catalog is verified before
/// the listener opens; a corrupt catalog aborts startup. `GET /`
/// serves the default tier, `GET /<label>` serves the named tier, and
/// unknown labels get a plain 404.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Tier served for requests that name no size.
    #[arg(long, default_value = "10M")]
    pub size: String,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gen(args) => cmd_gen::run(&args),
        Commands::Verify(args) => cmd_verify::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Headers(args) => cmd_headers::run(&args),
        Commands::Serve(args) => cmd_serve::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
