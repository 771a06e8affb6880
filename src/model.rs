//! Named paths of grid-space points: the document the editor mutates and the
//! renderer reads.

mod error;
mod parse;
mod store;

pub use error::StoreError;
pub use parse::parse_coordinate;
pub use store::{Removed, Row, Store};

#[cfg(test)]
mod tests;
