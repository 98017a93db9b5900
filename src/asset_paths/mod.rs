//! Helpers for classifying, deduplicating and prefixing resolved asset paths.
//!
//! Traversal code works on bare manifest paths; these helpers run once over the final
//! list so that prefixes are never applied twice.

mod filters;
mod prefix;

pub use filters::{is_stylesheet, unique_in_order};
pub use prefix::PathPrefix;
