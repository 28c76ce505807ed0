//! Neon Bowl (workspace facade crate).
//!
//! Re-exports the workspace crates as `neon_bowl::{core,engine,input,term,types}`
//! and carries the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use neon_bowl_core as core;
pub use neon_bowl_engine as engine;
pub use neon_bowl_input as input;
pub use neon_bowl_term as term;
pub use neon_bowl_types as types;
