//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`]. Whether an action is accepted right now is
//! decided by the session, not here.

pub mod map;

pub use neon_bowl_types as types;

pub use map::{handle_key_event, should_quit};
