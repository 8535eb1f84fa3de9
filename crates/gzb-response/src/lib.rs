#![warn(clippy::pedantic)]

pub mod builder;
pub mod response;

pub use builder::{DEFAULT_LABEL, ResponseBuilder};
pub use response::BombResponse;
