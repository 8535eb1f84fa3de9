use bytes::Bytes;
use gzb_catalog::SizeLabel;
use gzb_gzip::ENCODING_NAME;

/// A fully-formed bomb response: body bytes plus the header values
/// that describe them truthfully to the client.
///
/// One of these exists per request. It is constructed whole by
/// [`ResponseBuilder`](crate::ResponseBuilder) — there is no way to
/// change the tier of an existing value, so the body, encoding chain,
/// and length can never disagree with each other. The body is a
/// [`Bytes`] handle into the catalog's embedded resource; cloning or
/// dropping it costs a reference-count operation, nothing more.
///
/// The external HTTP layer attaches these three pieces to whatever
/// response type its framework uses and must transmit them verbatim:
/// recompressing, chunk-recoding, or "fixing" the length would break
/// the layered-encoding declaration.
#[derive(Clone, Debug)]
pub struct BombResponse {
    label: SizeLabel,
    rounds: u32,
    body: Bytes,
}

impl BombResponse {
    pub(crate) fn new(label: SizeLabel, rounds: u32, body: Bytes) -> Self {
        Self {
            label,
            rounds,
            body,
        }
    }

    /// The tier this response serves.
    #[must_use]
    pub fn label(&self) -> SizeLabel {
        self.label
    }

    /// The compressed body to transmit as-is.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Exact transmitted byte count — the compressed length, never the
    /// nominal decompressed size. This is the `Content-Length` value.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// The encoding chain in `Content-Encoding` order: one entry per
    /// compression round, all `"gzip"`.
    ///
    /// RFC 9110 lists codings in the order they were applied, so the
    /// last listed coding is the first one the client undoes. With a
    /// single algorithm repeated, the chain's length is the contract:
    /// a conforming client performs exactly this many passes.
    #[must_use]
    pub fn encoding_chain(&self) -> Vec<&'static str> {
        vec![ENCODING_NAME; self.rounds as usize]
    }

    /// The `Content-Encoding` header value: the chain joined with
    /// commas, e.g. `"gzip,gzip"` for a two-round tier.
    #[must_use]
    pub fn content_encoding(&self) -> String {
        self.encoding_chain().join(",")
    }

    /// Both header values as name/value pairs, ready to attach to an
    /// outgoing response.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Content-Encoding", self.content_encoding()),
            ("Content-Length", self.content_length().to_string()),
        ]
    }
}
