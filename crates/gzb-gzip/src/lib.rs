#![warn(clippy::pedantic)]

pub mod compress;
pub mod decompress;
pub mod error;
pub mod member;

pub use error::GzipError;

/// Name of the content coding applied to every catalog blob, as it
/// appears in `Content-Encoding` header values (RFC 9110 §8.4.1.3 /
/// RFC 1952).
pub const ENCODING_NAME: &str = "gzip";

/// The byte value every tier expands to. A uniform filler keeps the
/// compressed representation minimal and makes full-expansion checks
/// trivial.
pub const FILLER_BYTE: u8 = 0x00;
