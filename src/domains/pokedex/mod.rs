//! Pokedex domain module.
//!
//! This module holds the record data model and the in-memory mapping that
//! backs every resource and tool handler. The mapping is built once at
//! startup and never mutated afterwards, so handlers share it by `Arc`
//! without locking.

mod dex;
mod record;

pub use dex::Pokedex;
pub use record::{BaseStats, PokemonRecord};
