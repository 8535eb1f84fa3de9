#![warn(clippy::pedantic)]

pub mod catalog;
pub mod error;
pub mod label;

pub use catalog::{Catalog, CatalogEntry};
pub use error::CatalogError;
pub use label::SizeLabel;
