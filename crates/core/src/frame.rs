//! Frame and player model.
//!
//! Plain data: a frame is the rolls it has received plus the cumulative score
//! once that score is determinable. Whether a frame may take another roll is
//! decided by [`crate::rules`], not by the frame itself.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{PlayerKind, FRAME_COUNT, MAX_ROLLS_PER_FRAME, PIN_COUNT};

/// One frame of a player's game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    score: Option<u16>,
}

impl Frame {
    /// Build a frame from recorded rolls (scores are left unset).
    ///
    /// Rolls beyond the three-roll capacity are dropped.
    pub fn with_rolls(rolls: &[u8]) -> Self {
        let mut frame = Self::default();
        for &pins in rolls.iter().take(MAX_ROLLS_PER_FRAME) {
            frame.rolls.push(pins);
        }
        frame
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn roll(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    pub fn first_roll(&self) -> Option<u8> {
        self.roll(0)
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Cumulative score through this frame, once determinable.
    pub fn score(&self) -> Option<u16> {
        self.score
    }

    pub fn is_strike(&self) -> bool {
        self.first_roll() == Some(PIN_COUNT)
    }

    /// First two rolls clear the rack without the first being a strike.
    pub fn is_spare(&self) -> bool {
        match *self.rolls.as_slice() {
            [first, second, ..] => {
                first != PIN_COUNT && first.saturating_add(second) == PIN_COUNT
            }
            _ => false,
        }
    }

    pub fn pinfall(&self) -> u16 {
        self.rolls.iter().map(|&r| r as u16).sum()
    }

    /// Append a roll. Returns false (and records nothing) if the frame is full.
    pub(crate) fn push_roll(&mut self, pins: u8) -> bool {
        debug_assert!(
            !self.rolls.is_full(),
            "frame already holds {MAX_ROLLS_PER_FRAME} rolls"
        );
        self.rolls.try_push(pins).is_ok()
    }

    pub(crate) fn set_score(&mut self, score: Option<u16>) {
        self.score = score;
    }
}

/// A named participant with a fixed ten-frame sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    frames: [Frame; FRAME_COUNT],
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            frames: Default::default(),
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn bot(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Bot)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind.is_bot()
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Latest determined cumulative score (0 before anything is scored).
    pub fn total(&self) -> u16 {
        self.frames
            .iter()
            .rev()
            .find_map(Frame::score)
            .unwrap_or(0)
    }

    /// Same roster entry with a blank sheet.
    pub fn fresh(&self) -> Self {
        Self::new(self.name.clone(), self.kind)
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame; FRAME_COUNT] {
        &mut self.frames
    }
}
