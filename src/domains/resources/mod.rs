//! Resources domain module.
//!
//! This module exposes every Pokedex entry as a readable MCP resource under
//! the `pokemon://` URI scheme. Listing and reading are side-effect-free
//! lookups against the shared in-memory mapping.

mod error;
mod service;

pub use error::ResourceError;
pub use service::{POKEMON_URI_SCHEME, ResourceService, pokemon_uri};
