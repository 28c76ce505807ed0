//! Frame rules: completion, pins standing, and which frame is in play.
//!
//! These three functions must agree with each other: a frame stops accepting
//! rolls exactly when [`is_frame_complete`] turns true, and until then
//! [`pins_remaining`] bounds the next roll.

use crate::frame::Frame;
use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME};

/// Whether `frame` has received every roll it is entitled to.
///
/// Frames 0-8 close on a strike or after two rolls. The tenth frame closes
/// after three rolls, or after two when neither a strike nor a spare was
/// thrown.
pub fn is_frame_complete(frame: &Frame, frame_index: usize) -> bool {
    if frame_index == TENTH_FRAME {
        match *frame.rolls() {
            [_, _, _] => true,
            [first, second] => first != PIN_COUNT && first.saturating_add(second) != PIN_COUNT,
            _ => false,
        }
    } else {
        frame.is_strike() || frame.roll_count() >= 2
    }
}

/// Pins standing before the next roll in `frame`.
///
/// In the tenth frame the rack is reset after a strike, and after a spare for
/// the bonus ball. After a strike and a partial second ball the bonus ball
/// faces what is left.
pub fn pins_remaining(frame: &Frame, frame_index: usize) -> u8 {
    match *frame.rolls() {
        [] => PIN_COUNT,
        [first] if frame_index == TENTH_FRAME && first == PIN_COUNT => PIN_COUNT,
        [first] => PIN_COUNT.saturating_sub(first),
        [first, _] if frame_index == TENTH_FRAME && first != PIN_COUNT => PIN_COUNT,
        [_, second] if frame_index == TENTH_FRAME && second == PIN_COUNT => PIN_COUNT,
        [_, second] if frame_index == TENTH_FRAME => PIN_COUNT.saturating_sub(second),
        _ => 0,
    }
}

/// First frame that still accepts rolls, or the tenth frame when all are done.
pub fn current_frame_index(frames: &[Frame; FRAME_COUNT]) -> usize {
    frames
        .iter()
        .enumerate()
        .find(|(i, frame)| !is_frame_complete(frame, *i))
        .map(|(i, _)| i)
        .unwrap_or(TENTH_FRAME)
}

/// Lay a flat list of rolls out across a ten-frame sheet.
///
/// Each roll goes into the first frame that is not yet complete. Rolls left
/// over once the tenth frame is complete are ignored. No pin-count validation
/// is done here.
///
/// ```
/// use neon_bowl_core::rules::frames_from_rolls;
///
/// let frames = frames_from_rolls(&[10, 7, 3, 4]);
/// assert_eq!(frames[0].rolls(), &[10]);
/// assert_eq!(frames[1].rolls(), &[7, 3]);
/// assert_eq!(frames[2].rolls(), &[4]);
/// ```
pub fn frames_from_rolls(rolls: &[u8]) -> [Frame; FRAME_COUNT] {
    let mut frames: [Frame; FRAME_COUNT] = Default::default();
    for &pins in rolls {
        let index = current_frame_index(&frames);
        if is_frame_complete(&frames[index], index) {
            break;
        }
        frames[index].push_roll(pins);
    }
    frames
}
