use gzb_catalog::{Catalog, CatalogError, SizeLabel};

use crate::response::BombResponse;

/// Tier used when a request names no size at all.
///
/// The upstream docs waver between `10M` and `10G` for deployments;
/// `10M` is the conservative pick, and [`ResponseBuilder::with_default`]
/// exists precisely so operators choose deliberately instead of
/// inheriting whichever value a docstring happened to mention.
pub const DEFAULT_LABEL: SizeLabel = SizeLabel::M10;

/// Builds [`BombResponse`] values from a catalog.
///
/// Stateless apart from its configuration: given the same label, every
/// build returns byte-identical body and header values for the life of
/// the process. Builders are `Copy`-cheap to pass around and safe to
/// share across concurrent request handlers — they only ever read the
/// immutable catalog.
#[derive(Clone, Copy)]
pub struct ResponseBuilder {
    catalog: &'static Catalog,
    default_label: SizeLabel,
}

impl ResponseBuilder {
    /// Builder over the process-wide catalog with the stock default
    /// tier ([`DEFAULT_LABEL`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::global(),
            default_label: DEFAULT_LABEL,
        }
    }

    /// Replace the tier served when a request supplies no label.
    #[must_use]
    pub fn with_default(mut self, label: SizeLabel) -> Self {
        self.default_label = label;
        self
    }

    /// The configured default tier.
    #[must_use]
    pub fn default_label(&self) -> SizeLabel {
        self.default_label
    }

    /// Build a response for a typed label. Infallible: the catalog is
    /// total over [`SizeLabel`].
    #[must_use]
    pub fn build(&self, label: SizeLabel) -> BombResponse {
        let entry = self.catalog.lookup(label);
        BombResponse::new(label, entry.rounds(), entry.data().clone())
    }

    /// Build a response for an optional string label, as received from
    /// the request layer. `None` means the caller supplied no size and
    /// gets the configured default.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogError::UnknownSizeLabel`] untouched — an
    /// unsupported label is a hard failure for the caller to surface
    /// (404/400), never a silent clamp to a nearby tier, and no
    /// partial response is constructed.
    pub fn build_str(&self, label: Option<&str>) -> Result<BombResponse, CatalogError> {
        let label = match label {
            Some(s) => s.parse::<SizeLabel>()?,
            None => self.default_label,
        };
        Ok(self.build(label))
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
