//! Root-relative asset references and the capability that turns them into locations.
//!
//! References stay platform neutral (plain segments, displayed with forward slashes);
//! only a [`PathResolver`] knows how they map onto the host's storage.

mod reference;
mod resolve;

pub use reference::AssetReference;
pub use resolve::{PathResolver, RootResolver};
