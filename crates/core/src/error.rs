//! Roll rejection reasons.

use thiserror::Error;

/// Why a roll was not applied. A rejected roll never changes game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("game is over")]
    GameOver,

    #[error("a roll is still resolving")]
    RollInProgress,

    #[error("it is not the human player's turn")]
    NotHumanTurn,

    #[error("cannot knock down {pins} pins with only {remaining} standing")]
    TooManyPins { pins: u8, remaining: u8 },

    /// The frame in play already holds every roll it may take.
    #[error("frame {frame_index} is already complete")]
    FrameClosed { frame_index: usize },
}

impl RollError {
    /// Submissions that arrive at the wrong moment rather than with a bad value.
    ///
    /// These are ignored silently by the front end.
    pub fn is_out_of_turn(&self) -> bool {
        matches!(
            self,
            RollError::GameOver | RollError::RollInProgress | RollError::NotHumanTurn
        )
    }
}
