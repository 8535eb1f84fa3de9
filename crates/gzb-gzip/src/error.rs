/// Errors from the gzip layer.
///
/// These cover both directions: producing layered blobs (offline
/// generation) and unwinding them (verification). Higher layers wrap
/// them with tier context — a bare `GzipError` never reaches a request
/// handler.
///
/// Error hierarchy:
///
/// ```text
///   GzipError
///   ├── TruncatedMember      ← blob shorter than the RFC 1952 minimum
///   ├── BadMagic             ← first two bytes are not 0x1F 0x8B
///   ├── OutputLimitExceeded  ← one decompression pass grew past the cap
///   └── Io(std::io::Error)   ← from the underlying flate2 streams
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GzipError {
    /// The blob is shorter than the smallest possible gzip member
    /// (10-byte header + 8-byte trailer).
    #[error("gzip member too short: {len} bytes, minimum is 18")]
    TruncatedMember { len: usize },

    /// The blob does not start with the gzip magic bytes.
    #[error("bad gzip magic: expected 0x1F8B, got {found:#06X}")]
    BadMagic { found: u16 },

    /// A single decompression pass produced more than `limit` bytes.
    ///
    /// Intermediate layers of a well-formed catalog blob are small;
    /// hitting this cap means the input is not one of ours.
    #[error("decompressed output exceeds {limit}-byte limit")]
    OutputLimitExceeded { limit: u64 },

    /// An I/O error from the flate2 encoder or decoder streams. Corrupt
    /// deflate data surfaces here as `InvalidData`.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
