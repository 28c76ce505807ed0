//! Scoring module - ten-pin running score with strike/spare look-ahead
//!
//! Scoring is a single forward pass over an immutable sheet. Bonuses are read
//! by index from the frames that follow (i+1, and i+2 for back-to-back
//! strikes). The pass stops at the first frame whose value cannot be
//! determined yet, so every frame after it stays unscored too.
//!
//! The pass is pure: re-running it on the same rolls yields the same scores,
//! which lets the turn controller rescore from scratch after every roll.

use crate::frame::Frame;
use crate::rules::is_frame_complete;
use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME};

/// Cumulative score per frame; `None` where not yet determinable.
pub type ScoreLine = [Option<u16>; FRAME_COUNT];

/// Compute the running score of every frame on the sheet.
///
/// ```
/// use neon_bowl_core::rules::frames_from_rolls;
/// use neon_bowl_core::scoring::running_scores;
///
/// // Strike, then 3 and 4: the strike is worth 17.
/// let scores = running_scores(&frames_from_rolls(&[10, 3, 4]));
/// assert_eq!(scores[0], Some(17));
/// assert_eq!(scores[1], Some(24));
/// assert_eq!(scores[2], None);
/// ```
pub fn running_scores(frames: &[Frame; FRAME_COUNT]) -> ScoreLine {
    let mut line: ScoreLine = [None; FRAME_COUNT];
    let mut total: u16 = 0;

    for (i, frame) in frames.iter().enumerate() {
        if frame.is_empty() {
            break;
        }
        let Some(value) = frame_value(frames, i) else {
            break;
        };
        total = total.saturating_add(value);
        line[i] = Some(total);
    }

    line
}

/// Rescore `frames` in place, clearing any stale scores first.
pub fn rescore(frames: &mut [Frame; FRAME_COUNT]) {
    let line = running_scores(frames);
    for (frame, score) in frames.iter_mut().zip(line) {
        frame.set_score(score);
    }
}

/// Points earned by frame `i` alone, if determinable.
fn frame_value(frames: &[Frame; FRAME_COUNT], i: usize) -> Option<u16> {
    let frame = &frames[i];

    if i == TENTH_FRAME {
        // No eleventh frame to look into: the tenth is just its own pinfall.
        return is_frame_complete(frame, i).then(|| frame.pinfall());
    }

    if frame.is_strike() {
        return strike_bonus(frames, i).map(|bonus| PIN_COUNT as u16 + bonus);
    }

    match *frame.rolls() {
        [_, _, ..] if frame.is_spare() => {
            spare_bonus(frames, i).map(|bonus| PIN_COUNT as u16 + bonus)
        }
        [first, second, ..] => Some(first as u16 + second as u16),
        _ => None,
    }
}

/// The next two rolls after the strike in frame `i`.
fn strike_bonus(frames: &[Frame; FRAME_COUNT], i: usize) -> Option<u16> {
    let next = frames.get(i + 1)?;
    let first = next.first_roll()?;
    let second = match next.roll(1) {
        Some(pins) => pins,
        None if first == PIN_COUNT => frames.get(i + 2)?.first_roll()?,
        None => return None,
    };
    Some(first as u16 + second as u16)
}

/// The next roll after the spare in frame `i`.
fn spare_bonus(frames: &[Frame; FRAME_COUNT], i: usize) -> Option<u16> {
    frames.get(i + 1)?.first_roll().map(u16::from)
}
