//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the ten-pin scoring rules and the two-player turn
//! controller. It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: The same rolls always produce the same sheet
//! - **Testable**: Every rule is a plain function over frame data
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`frame`]: Frame and player model (rolls plus derived cumulative score)
//! - [`rules`]: Frame completion, pins remaining, current frame selection
//! - [`scoring`]: Running score with strike/spare look-ahead
//! - [`marks`]: Scoreboard symbols (`X`, `/`, `-`, digits)
//! - [`game_state`]: Turn controller: applies rolls, passes turns, ends the game
//! - [`snapshot`]: Plain-data copy of the state for rendering
//! - [`rng`]: Seeded LCG for the automated opponent
//!
//! # Game Rules
//!
//! - **Frames 1-9**: close on a strike or after two balls
//! - **Tenth frame**: a strike or spare earns bonus balls, up to three in total
//! - **Strike**: 10 plus the next two balls
//! - **Spare**: 10 plus the next ball
//! - **Turns**: pass after each completed frame; the game ends once both
//!   players have completed their tenth frame
//!
//! # Example
//!
//! ```
//! use neon_bowl_core::GameState;
//!
//! let mut game = GameState::human_vs_bot("YOU", "BOT");
//!
//! // A strike closes the frame and hands the lane to the bot.
//! let event = game.submit_roll(10).unwrap();
//! assert!(event.turn_passed);
//! assert_eq!(game.current_player_index(), 1);
//!
//! // Knocking down more pins than are standing is rejected.
//! game.submit_roll(7).unwrap();
//! assert!(game.submit_roll(4).is_err());
//! ```

pub mod error;
pub mod frame;
pub mod game_state;
pub mod marks;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

pub use neon_bowl_types as types;

// Re-export commonly used types for convenience
pub use error::RollError;
pub use frame::{Frame, Player};
pub use game_state::{GameState, Outcome, RollEvent};
pub use marks::{frame_marks, roll_mark};
pub use rng::SimpleRng;
pub use rules::{current_frame_index, frames_from_rolls, is_frame_complete, pins_remaining};
pub use scoring::{rescore, running_scores, ScoreLine};
pub use snapshot::{GameSnapshot, LaneSnapshot, PlayerSnapshot};
