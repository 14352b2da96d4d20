//! Pokedex MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes a
//! fixed in-memory Pokedex through the MCP resource and tool surfaces.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **pokedex**: The record data model and the in-memory mapping
//!   - **resources**: Pokedex entries exposed as readable MCP resources
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use pokedex_mcp_server::{core::Config, core::PokedexServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = PokedexServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, PokedexServer, Result};
pub use domains::pokedex::{BaseStats, Pokedex, PokemonRecord};
