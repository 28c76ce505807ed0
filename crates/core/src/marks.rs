//! Scoreboard marks for individual rolls.

use crate::frame::Frame;
use crate::types::{RollMark, PIN_COUNT, TENTH_FRAME};

/// Scoreboard symbol for roll `roll_index` of `frame`, if that roll exists.
///
/// A full rack knocked down by the first ball at it is a strike; the second
/// ball clearing what was left is a spare. In the tenth frame the rack is
/// reset after every clear, so a later ball can be a strike too.
pub fn roll_mark(frame: &Frame, roll_index: usize, frame_index: usize) -> Option<RollMark> {
    if frame_index != TENTH_FRAME && roll_index >= 2 {
        return None;
    }
    let pins = frame.roll(roll_index)?;
    let (standing, first_ball) = rack_before(frame, roll_index);

    let mark = if first_ball && pins == PIN_COUNT {
        RollMark::Strike
    } else if !first_ball && pins == standing {
        RollMark::Spare
    } else if pins == 0 {
        RollMark::Gutter
    } else {
        RollMark::Pins(pins)
    };
    Some(mark)
}

/// Pins standing before roll `roll_index`, and whether it is the first ball
/// thrown at that rack.
fn rack_before(frame: &Frame, roll_index: usize) -> (u8, bool) {
    let mut standing = PIN_COUNT;
    let mut first_ball = true;
    for &pins in frame.rolls().iter().take(roll_index) {
        standing = standing.saturating_sub(pins);
        if standing == 0 || !first_ball {
            standing = PIN_COUNT;
            first_ball = true;
        } else {
            first_ball = false;
        }
    }
    (standing, first_ball)
}

/// Marks for every slot of a frame (two slots, three in the tenth).
pub fn frame_marks(frame: &Frame, frame_index: usize) -> [Option<RollMark>; 3] {
    let mut out = [None; 3];
    let slots = if frame_index == TENTH_FRAME { 3 } else { 2 };
    for (i, slot) in out.iter_mut().enumerate().take(slots) {
        *slot = roll_mark(frame, i, frame_index);
    }
    out
}
