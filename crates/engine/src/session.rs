//! Session: presentation timing on top of the turn controller.
//!
//! The core applies a roll instantly. A session puts the ball on the lane
//! first: a submitted roll enters [`Phase::Rolling`] and is only applied once
//! the reveal delay has run out. While a roll is in flight (or the lane is
//! being handed to the other player) further submissions are rejected. The
//! bot's rolls come from a [`RollSource`] after a short think delay.
//!
//! Time only moves through [`Session::tick`], so the whole thing can be driven
//! deterministically from tests.

use tracing::{debug, trace, warn};

use crate::core::{GameSnapshot, GameState, RollError, RollEvent};
use crate::roll_source::RollSource;
use crate::types::{
    RollCall, BOT_THINK_MS, PIN_COUNT, RESULT_CLEAR_MS, ROLL_REVEAL_MS, TURN_HANDOFF_MS,
};

/// Presentation delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub reveal_ms: u32,
    pub clear_ms: u32,
    pub handoff_ms: u32,
    pub bot_think_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_ms: ROLL_REVEAL_MS,
            clear_ms: RESULT_CLEAR_MS,
            handoff_ms: TURN_HANDOFF_MS,
            bot_think_ms: BOT_THINK_MS,
        }
    }
}

impl SessionConfig {
    /// All delays zero: every roll resolves on the next tick.
    pub fn instant() -> Self {
        Self {
            reveal_ms: 0,
            clear_ms: 0,
            handoff_ms: 0,
            bot_think_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoll,
    /// Ball on the lane; `pins` is applied when `remaining_ms` runs out.
    Rolling { pins: u8, remaining_ms: u32 },
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Callout {
    call: RollCall,
    standing: u8,
    remaining_ms: u32,
}

pub struct Session {
    config: SessionConfig,
    state: GameState,
    phase: Phase,
    bot: Box<dyn RollSource>,
    callout: Option<Callout>,
    handoff_ms: u32,
    bot_wait_ms: u32,
}

impl Session {
    pub fn new(state: GameState, config: SessionConfig, bot: Box<dyn RollSource>) -> Self {
        let phase = if state.is_game_over() {
            Phase::GameOver
        } else {
            Phase::AwaitingRoll
        };
        Self {
            config,
            state,
            phase,
            bot,
            callout: None,
            handoff_ms: 0,
            bot_wait_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn is_rolling(&self) -> bool {
        matches!(self.phase, Phase::Rolling { .. })
    }

    /// Whether a human roll would be accepted right now.
    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::AwaitingRoll
            && self.handoff_ms == 0
            && !self.state.current_player().is_bot()
    }

    /// Submit a roll for the human player.
    ///
    /// Out-of-turn submissions and bad pin counts are rejected without
    /// touching the game.
    pub fn submit_roll(&mut self, pins: u8) -> Result<(), RollError> {
        let result = self.check_human_roll(pins);
        match result {
            Ok(()) => self.begin_roll(pins),
            Err(err) => debug!(pins, %err, "roll rejected"),
        }
        result
    }

    /// Submit a roll that knocks down every standing pin.
    pub fn submit_all(&mut self) -> Result<(), RollError> {
        self.submit_roll(self.state.pins_remaining())
    }

    fn check_human_roll(&self, pins: u8) -> Result<(), RollError> {
        match self.phase {
            Phase::GameOver => return Err(RollError::GameOver),
            Phase::Rolling { .. } => return Err(RollError::RollInProgress),
            Phase::AwaitingRoll => {}
        }
        if self.handoff_ms > 0 {
            return Err(RollError::RollInProgress);
        }
        if self.state.current_player().is_bot() {
            return Err(RollError::NotHumanTurn);
        }
        self.state.validate_roll(pins)
    }

    fn begin_roll(&mut self, pins: u8) {
        trace!(
            player = self.state.current_player_index(),
            pins,
            "ball on the lane"
        );
        self.callout = None;
        self.bot_wait_ms = 0;
        self.phase = Phase::Rolling {
            pins,
            remaining_ms: self.config.reveal_ms,
        };
    }

    /// Advance model time.
    ///
    /// Each tick performs at most one phase transition. Returns the roll
    /// applied during this tick, if any.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<RollEvent> {
        if let Some(callout) = self.callout.as_mut() {
            callout.remaining_ms = callout.remaining_ms.saturating_sub(elapsed_ms);
            if callout.remaining_ms == 0 {
                self.callout = None;
            }
        }

        match self.phase {
            Phase::GameOver => None,
            Phase::Rolling { pins, remaining_ms } => {
                if remaining_ms > elapsed_ms {
                    self.phase = Phase::Rolling {
                        pins,
                        remaining_ms: remaining_ms - elapsed_ms,
                    };
                    None
                } else {
                    self.resolve(pins)
                }
            }
            Phase::AwaitingRoll => {
                if self.handoff_ms > 0 {
                    self.handoff_ms = self.handoff_ms.saturating_sub(elapsed_ms);
                    return None;
                }
                if self.state.current_player().is_bot() {
                    self.bot_wait_ms = self.bot_wait_ms.saturating_add(elapsed_ms);
                    if self.bot_wait_ms >= self.config.bot_think_ms {
                        let standing = self.state.pins_remaining();
                        let pins = self.bot.next_roll(standing).min(standing);
                        self.begin_roll(pins);
                    }
                }
                None
            }
        }
    }

    fn resolve(&mut self, pins: u8) -> Option<RollEvent> {
        match self.state.submit_roll(pins) {
            Ok(event) => {
                self.callout = Some(Callout {
                    call: event.call,
                    standing: event.pins_before.saturating_sub(event.pins),
                    remaining_ms: self.config.clear_ms,
                })
                .filter(|c| c.remaining_ms > 0);
                if event.game_over {
                    self.phase = Phase::GameOver;
                } else {
                    self.phase = Phase::AwaitingRoll;
                    if event.turn_passed {
                        self.handoff_ms = self.config.handoff_ms;
                    }
                }
                self.bot_wait_ms = 0;
                Some(event)
            }
            Err(err) => {
                warn!(pins, %err, "in-flight roll could not be applied");
                self.phase = Phase::AwaitingRoll;
                None
            }
        }
    }

    /// Start a fresh game. Any roll in flight is discarded.
    pub fn restart(&mut self) {
        self.state.restart();
        self.phase = Phase::AwaitingRoll;
        self.callout = None;
        self.handoff_ms = 0;
        self.bot_wait_ms = 0;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
        out.accepting_input = self.accepting_input();

        if let Phase::Rolling { remaining_ms, .. } = self.phase {
            let travelled = self.config.reveal_ms.saturating_sub(remaining_ms);
            let progress = (travelled as u64 * 100)
                .checked_div(self.config.reveal_ms as u64)
                .unwrap_or(100);
            out.lane.ball_progress = Some(progress.min(100) as u8);
        } else if let Some(callout) = self.callout {
            out.lane.standing = callout.standing;
            out.lane.call = Some(callout.call);
        }
        debug_assert!(out.lane.standing <= PIN_COUNT);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(bot: impl RollSource + 'static) -> Session {
        Session::new(GameState::default(), SessionConfig::default(), Box::new(bot))
    }

    #[test]
    fn test_roll_applies_after_reveal() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        s.submit_roll(7).unwrap();
        assert!(s.is_rolling());
        assert_eq!(s.tick(ROLL_REVEAL_MS - 1), None);
        assert_eq!(s.state().roll_count(), 0);

        let event = s.tick(1).unwrap();
        assert_eq!(event.pins, 7);
        assert_eq!(s.phase(), Phase::AwaitingRoll);
        assert_eq!(s.state().pins_remaining(), 3);
    }

    #[test]
    fn test_second_submit_while_rolling_is_ignored() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        s.submit_roll(4).unwrap();
        assert_eq!(s.submit_roll(3), Err(RollError::RollInProgress));
        s.tick(ROLL_REVEAL_MS);
        assert_eq!(s.state().roll_count(), 1);
    }

    #[test]
    fn test_invalid_pins_rejected_before_rolling() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        assert_eq!(
            s.submit_roll(11),
            Err(RollError::TooManyPins { pins: 11, remaining: 10 })
        );
        assert_eq!(s.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn test_bot_rolls_after_handoff_and_think() {
        let mut s = session_with(|standing: u8| -> u8 { standing });
        s.submit_roll(10).unwrap();
        let event = s.tick(ROLL_REVEAL_MS).unwrap();
        assert!(event.turn_passed);

        assert_eq!(s.submit_roll(1), Err(RollError::RollInProgress));
        s.tick(TURN_HANDOFF_MS);
        assert_eq!(s.submit_roll(1), Err(RollError::NotHumanTurn));

        s.tick(BOT_THINK_MS);
        assert!(s.is_rolling());
        let event = s.tick(ROLL_REVEAL_MS).unwrap();
        assert_eq!(event.player, 1);
        assert_eq!(event.call, RollCall::Strike);
        assert_eq!(s.state().current_player_index(), 0);
    }

    #[test]
    fn test_bot_overshoot_is_clamped() {
        let mut s = Session::new(
            GameState::default(),
            SessionConfig::instant(),
            Box::new(|_: u8| -> u8 { 200 }),
        );
        s.submit_roll(3).unwrap();
        s.tick(0);
        s.submit_roll(4).unwrap();
        s.tick(0);
        s.tick(0); // bot picks
        let event = s.tick(0).unwrap();
        assert_eq!(event.pins, 10);
    }

    #[test]
    fn test_callout_clears_after_delay() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        s.submit_roll(6).unwrap();
        s.tick(ROLL_REVEAL_MS);
        let snap = s.snapshot();
        assert_eq!(snap.lane.call, Some(RollCall::Pins(6)));
        assert_eq!(snap.lane.standing, 4);

        s.tick(RESULT_CLEAR_MS);
        assert_eq!(s.snapshot().lane.call, None);
    }

    #[test]
    fn test_restart_discards_roll_in_flight() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        s.submit_roll(9).unwrap();
        s.restart();
        assert_eq!(s.phase(), Phase::AwaitingRoll);
        assert_eq!(s.tick(ROLL_REVEAL_MS), None);
        assert_eq!(s.state().roll_count(), 0);
        assert_eq!(s.state().episode_id(), 1);
    }

    #[derive(Clone, Default)]
    struct LogSink(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restart_logs_once() {
        let sink = LogSink::default();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut s = session_with(|_: u8| -> u8 { 0 });
            s.restart();
        });

        let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("restarted").count(), 1, "{logs}");
    }

    #[test]
    fn test_snapshot_reports_ball_progress() {
        let mut s = session_with(|_: u8| -> u8 { 0 });
        s.submit_roll(2).unwrap();
        s.tick(ROLL_REVEAL_MS / 2);
        let snap = s.snapshot();
        assert_eq!(snap.lane.ball_progress, Some(50));
        assert!(!snap.accepting_input);
    }
}
