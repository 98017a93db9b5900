//! Manifest data model and its lazily loaded store.

mod chunk;
mod store;

pub use chunk::{Chunk, Manifest};
pub use store::ManifestStore;
