//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer of styled cells and the renderer flushes only what changed.
//! No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use neon_bowl_core as core;
pub use neon_bowl_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{banner_text, AnchorY, GameView, Viewport, CONTENT_HEIGHT, CONTENT_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
