//! Configuration for the `pxscale` command
//!
//! Provides types and parsing for `pxscale.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
