//! Plain snapshot data handed to the view and to serializers.

use serde::Serialize;

use crate::frame::Frame;
use crate::game_state::Outcome;
use crate::types::{PlayerKind, RollCall, FRAME_COUNT, PIN_COUNT, PLAYER_COUNT};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub kind: PlayerKind,
    pub frames: [Frame; FRAME_COUNT],
    pub current_frame: usize,
    pub total: u16,
}

/// What the lane shows: pins standing, the ball in flight, and the call-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LaneSnapshot {
    pub standing: u8,
    /// Ball travel in percent while a roll is resolving.
    pub ball_progress: Option<u8>,
    pub call: Option<RollCall>,
}

impl LaneSnapshot {
    pub fn at_rest(standing: u8) -> Self {
        Self {
            standing,
            ball_progress: None,
            call: None,
        }
    }
}

impl Default for LaneSnapshot {
    fn default() -> Self {
        Self::at_rest(PIN_COUNT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub players: [PlayerSnapshot; PLAYER_COUNT],
    pub current_player: usize,
    pub current_frame: usize,
    pub pins_remaining: u8,
    pub bot_turn: bool,
    /// Whether the human may submit a roll right now.
    pub accepting_input: bool,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub episode_id: u32,
    pub roll_count: u32,
    pub lane: LaneSnapshot,
}

impl GameSnapshot {
    pub fn current(&self) -> &PlayerSnapshot {
        &self.players[self.current_player.min(PLAYER_COUNT - 1)]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            players: Default::default(),
            current_player: 0,
            current_frame: 0,
            pins_remaining: PIN_COUNT,
            bot_turn: false,
            accepting_input: false,
            game_over: false,
            outcome: None,
            episode_id: 0,
            roll_count: 0,
            lane: LaneSnapshot::default(),
        }
    }
}
