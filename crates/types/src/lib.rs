//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond classification, making them
//! usable in any context (scoring core, session orchestration, terminal view).
//!
//! # Lane Dimensions
//!
//! A game is always ten frames of ten pins:
//!
//! - **Frames**: 10 (indexed 0-9)
//! - **Tenth frame**: index 9, up to three rolls
//! - **Pins**: 10 per rack
//! - **Players**: 2 (one human, one automated opponent)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds of model time (the session is advanced by
//! explicit ticks, never by reading a clock):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `ROLL_REVEAL_MS` | 1500 | Ball travel before the roll is applied |
//! | `RESULT_CLEAR_MS` | 800 | Call-out stays on the lane after the roll lands |
//! | `TURN_HANDOFF_MS` | 500 | Input stays closed after the turn passes |
//! | `BOT_THINK_MS` | 1000 | Bot idles before it rolls |
//!
//! # Examples
//!
//! ```
//! use neon_bowl_types::{RollCall, RollMark, FRAME_COUNT, PIN_COUNT};
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//!
//! assert_eq!(RollMark::Strike.symbol(), "X");
//! assert_eq!(RollCall::classify(10, 10), RollCall::Strike);
//! ```

use serde::Serialize;

/// Frames per game (10)
pub const FRAME_COUNT: usize = 10;

/// Index of the final frame, the only one with a bonus roll
pub const TENTH_FRAME: usize = FRAME_COUNT - 1;

/// Pins in a full rack (10)
pub const PIN_COUNT: u8 = 10;

/// Maximum rolls recorded in any frame (tenth frame only)
pub const MAX_ROLLS_PER_FRAME: usize = 3;

/// Players per game (human and bot)
pub const PLAYER_COUNT: usize = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Ball travel time before the pin count is applied (1500ms)
pub const ROLL_REVEAL_MS: u32 = 1500;

/// How long the result call-out stays on the lane after the roll lands (800ms)
pub const RESULT_CLEAR_MS: u32 = 800;

/// Input hold after a completed frame passes the turn (500ms)
pub const TURN_HANDOFF_MS: u32 = 500;

/// Bot idle time before it submits a roll (1000ms)
pub const BOT_THINK_MS: u32 = 1000;


/// Who supplies a player's rolls
///
/// - **Human**: rolls come from direct input
/// - **Bot**: rolls come from an automated roll source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerKind {
    #[default]
    Human,
    Bot,
}

impl PlayerKind {
    pub fn is_bot(&self) -> bool {
        matches!(self, PlayerKind::Bot)
    }
}

/// Game actions produced by input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Knock down exactly this many pins
    Roll(u8),
    /// Knock down every standing pin (strike or spare chance)
    KnockAll,
    /// Discard the current game and start over
    Restart,
}

/// Scoreboard symbol for a single recorded roll
///
/// - **Strike**: `X`
/// - **Spare**: `/`
/// - **Gutter**: `-`
/// - **Pins(n)**: the digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RollMark {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
}

impl RollMark {
    pub fn symbol(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            RollMark::Strike => "X",
            RollMark::Spare => "/",
            RollMark::Gutter => "-",
            RollMark::Pins(n) => DIGITS.get(*n as usize).copied().unwrap_or("?"),
        }
    }
}

/// Lane call-out announced when a roll lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RollCall {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
}

impl RollCall {
    /// Classify a roll against the pins that were standing before it.
    ///
    /// ```
    /// use neon_bowl_types::RollCall;
    ///
    /// assert_eq!(RollCall::classify(4, 4), RollCall::Spare);
    /// assert_eq!(RollCall::classify(4, 10), RollCall::Pins(4));
    /// ```
    pub fn classify(pins: u8, pins_before: u8) -> Self {
        if pins == PIN_COUNT && pins_before == PIN_COUNT {
            RollCall::Strike
        } else if pins == pins_before && pins_before > 0 && pins_before < PIN_COUNT {
            RollCall::Spare
        } else if pins == 0 {
            RollCall::Gutter
        } else {
            RollCall::Pins(pins)
        }
    }

    pub fn label(&self) -> String {
        match self {
            RollCall::Strike => "STRIKE!".to_string(),
            RollCall::Spare => "SPARE!".to_string(),
            RollCall::Gutter => "GUTTER!".to_string(),
            RollCall::Pins(n) => format!("{n} PINS"),
        }
    }
}

impl From<RollMark> for RollCall {
    fn from(mark: RollMark) -> Self {
        match mark {
            RollMark::Strike => RollCall::Strike,
            RollMark::Spare => RollCall::Spare,
            RollMark::Gutter => RollCall::Gutter,
            RollMark::Pins(n) => RollCall::Pins(n),
        }
    }
}
