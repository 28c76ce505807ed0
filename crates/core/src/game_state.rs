//! Game state module - the turn controller
//!
//! Owns both players' sheets and decides whose turn it is. Every roll goes
//! through [`GameState::submit_roll`]: the pin count is validated, appended to
//! the active frame, the whole sheet is rescored from scratch, and then the
//! frame is checked for completion to decide whether the turn passes or the
//! game ends. A rejected roll leaves the state untouched.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::RollError;
use crate::frame::Player;
use crate::marks::roll_mark;
use crate::rules::{current_frame_index, is_frame_complete, pins_remaining};
use crate::scoring::rescore;
use crate::snapshot::{GameSnapshot, LaneSnapshot, PlayerSnapshot};
use crate::types::{RollCall, PLAYER_COUNT, TENTH_FRAME};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Index of the player with the higher tenth-frame score.
    Winner(usize),
    Tie,
}

/// Record of the last roll applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RollEvent {
    pub player: usize,
    pub frame_index: usize,
    pub pins: u8,
    /// Pins that were standing when the ball was thrown.
    pub pins_before: u8,
    pub call: RollCall,
    pub frame_complete: bool,
    pub turn_passed: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    players: [Player; PLAYER_COUNT],
    current_player: usize,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Rolls applied in this episode, both players combined.
    roll_count: u32,
    last_event: Option<RollEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::human_vs_bot("YOU", "BOT")
    }
}

impl GameState {
    /// Create a game for the given roster. Sheets always start blank.
    pub fn new(players: [Player; PLAYER_COUNT]) -> Self {
        Self {
            players: players.map(|p| p.fresh()),
            current_player: 0,
            game_over: false,
            episode_id: 0,
            roll_count: 0,
            last_event: None,
        }
    }

    pub fn human_vs_bot(human: impl Into<String>, bot: impl Into<String>) -> Self {
        Self::new([Player::human(human), Player::bot(bot)])
    }

    /// Throw away both sheets and start over with player 0 in frame 0.
    pub fn restart(&mut self) {
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self {
            episode_id,
            ..Self::new(self.players.clone())
        };
        info!(episode_id, "game restarted");
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Frame in play for `player` (the tenth once that player has finished).
    pub fn current_frame_index(&self, player: usize) -> usize {
        self.players
            .get(player)
            .map(|p| current_frame_index(p.frames()))
            .unwrap_or(TENTH_FRAME)
    }

    /// Pins standing for `player`'s next roll.
    pub fn pins_remaining_for(&self, player: usize) -> u8 {
        let Some(p) = self.players.get(player) else {
            return 0;
        };
        let frame_index = current_frame_index(p.frames());
        pins_remaining(&p.frames()[frame_index], frame_index)
    }

    /// Pins standing for the active player's next roll.
    pub fn pins_remaining(&self) -> u8 {
        self.pins_remaining_for(self.current_player)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    pub fn last_event(&self) -> Option<RollEvent> {
        self.last_event
    }

    /// Winner by tenth-frame cumulative score; `None` until the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        if !self.game_over {
            return None;
        }
        let final_score = |p: &Player| p.frames()[TENTH_FRAME].score().unwrap_or(0);
        let [first, second] = &self.players;
        let outcome = match final_score(first).cmp(&final_score(second)) {
            std::cmp::Ordering::Greater => Outcome::Winner(0),
            std::cmp::Ordering::Less => Outcome::Winner(1),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        Some(outcome)
    }

    /// Check a roll for the active player without applying it.
    pub fn validate_roll(&self, pins: u8) -> Result<(), RollError> {
        if self.game_over {
            return Err(RollError::GameOver);
        }
        let player = self.current_player();
        let frame_index = current_frame_index(player.frames());
        let frame = &player.frames()[frame_index];
        let closed = is_frame_complete(frame, frame_index);
        debug_assert!(!closed, "active player has no open frame");
        if closed {
            return Err(RollError::FrameClosed { frame_index });
        }
        let remaining = pins_remaining(frame, frame_index);
        if pins > remaining {
            return Err(RollError::TooManyPins { pins, remaining });
        }
        Ok(())
    }

    /// Apply a roll for the active player.
    pub fn submit_roll(&mut self, pins: u8) -> Result<RollEvent, RollError> {
        self.validate_roll(pins)?;

        let player_index = self.current_player;
        let frame_index = self.current_frame_index(player_index);
        let pins_before = self.pins_remaining();

        let frames = self.players[player_index].frames_mut();
        let frame = &mut frames[frame_index];
        if !frame.push_roll(pins) {
            return Err(RollError::FrameClosed { frame_index });
        }
        let roll_index = frame.roll_count() - 1;
        let call = roll_mark(frame, roll_index, frame_index)
            .map(RollCall::from)
            .unwrap_or_else(|| RollCall::classify(pins, pins_before));
        rescore(frames);
        let frame_complete = is_frame_complete(&frames[frame_index], frame_index);

        self.roll_count = self.roll_count.wrapping_add(1);

        let mut turn_passed = false;
        if frame_complete {
            if self.all_sheets_complete() {
                self.game_over = true;
                info!(
                    episode_id = self.episode_id,
                    scores = ?self.players.each_ref().map(|p| p.total()),
                    "game over"
                );
            } else {
                self.current_player = (self.current_player + 1) % PLAYER_COUNT;
                turn_passed = true;
            }
        }

        let event = RollEvent {
            player: player_index,
            frame_index,
            pins,
            pins_before,
            call,
            frame_complete,
            turn_passed,
            game_over: self.game_over,
        };
        debug!(
            player = player_index,
            frame = frame_index + 1,
            pins,
            ?call,
            turn_passed,
            "roll applied"
        );
        self.last_event = Some(event);
        Ok(event)
    }

    fn all_sheets_complete(&self) -> bool {
        self.players
            .iter()
            .all(|p| is_frame_complete(&p.frames()[TENTH_FRAME], TENTH_FRAME))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (slot, player) in out.players.iter_mut().zip(&self.players) {
            slot.name.clear();
            slot.name.push_str(player.name());
            slot.kind = player.kind();
            slot.frames.clone_from(player.frames());
            slot.current_frame = current_frame_index(player.frames());
            slot.total = player.total();
        }
        out.current_player = self.current_player;
        out.current_frame = self.current_frame_index(self.current_player);
        out.pins_remaining = self.pins_remaining();
        out.bot_turn = self.current_player().is_bot();
        out.accepting_input = !self.game_over && !out.bot_turn;
        out.game_over = self.game_over;
        out.outcome = self.winner();
        out.episode_id = self.episode_id;
        out.roll_count = self.roll_count;
        out.lane = LaneSnapshot::at_rest(out.pins_remaining);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            kind: player.kind(),
            frames: player.frames().clone(),
            current_frame: current_frame_index(player.frames()),
            total: player.total(),
        }
    }
}
