//! Engine module - turn orchestration over model time
//!
//! Wraps the synchronous [`core::GameState`] in a [`Session`] that gates human
//! input, delays each roll while the ball travels, hands the lane over between
//! players, and asks a [`RollSource`] for the bot's pin counts.
//!
//! ```
//! use neon_bowl_engine::{core::GameState, Session, SessionConfig};
//!
//! let mut session = Session::new(
//!     GameState::default(),
//!     SessionConfig::instant(),
//!     Box::new(|standing: u8| -> u8 { standing }),
//! );
//! session.submit_roll(10).unwrap();
//! let event = session.tick(0).unwrap();
//! assert!(event.turn_passed);
//! ```

pub mod roll_source;
pub mod session;

pub use neon_bowl_core as core;
pub use neon_bowl_types as types;

pub use roll_source::{BotRoller, RollSource};
pub use session::{Phase, Session, SessionConfig};
