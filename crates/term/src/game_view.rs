//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{frame_marks, roll_mark, Frame, GameSnapshot, Outcome, PlayerSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{RollCall, RollMark, FRAME_COUNT, MAX_ROLLS_PER_FRAME, PIN_COUNT, TENTH_FRAME};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Width of the laid-out content block.
pub const CONTENT_WIDTH: u16 = 66;
/// Height of the laid-out content block.
pub const CONTENT_HEIGHT: u16 = 27;

const NEON_PINK: Rgb = Rgb::new(255, 60, 200);
const NEON_CYAN: Rgb = Rgb::new(0, 230, 255);
const GOLD: Rgb = Rgb::new(255, 210, 60);
const RED: Rgb = Rgb::new(255, 80, 80);
const TEXT: Rgb = Rgb::new(220, 220, 230);
const MUTED: Rgb = Rgb::new(120, 120, 140);
const LANE: Rgb = Rgb::new(46, 30, 18);

// Rows relative to the top of the content block.
const TITLE_Y: u16 = 0;
const BANNER_Y: u16 = 3;
const LANE_Y: u16 = 5;
const LANE_H: u16 = 9;
const CALLOUT_Y: u16 = 14;
const PICKER_Y: u16 = 16;
const BOARD_Y: u16 = 18;
const HELP_Y: u16 = 25;
const GAME_OVER_Y: u16 = 26;

const LANE_W: u16 = 23;
const NAME_W: u16 = 8;
const FRAME_W: u16 = 5;
const TENTH_W: u16 = 7;

/// Pin positions as (row, column offset), back row first.
///
/// Standing pins are drawn in this order, so a partly cleared rack shows its
/// survivors at the back of the deck.
const PIN_LAYOUT: [(u16, u16); PIN_COUNT as usize] = [
    (0, 0),
    (0, 4),
    (0, 8),
    (0, 12),
    (1, 2),
    (1, 6),
    (1, 10),
    (2, 4),
    (2, 8),
    (3, 6),
];

/// Terminal view of the bowling alley.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let x0 = viewport.width.saturating_sub(CONTENT_WIDTH) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CONTENT_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        self.draw_title(fb, x0, y0);
        self.draw_banner(fb, snap, x0, y0 + BANNER_Y);
        self.draw_lane(fb, snap, x0, y0 + LANE_Y);
        self.draw_picker(fb, snap, x0, y0 + PICKER_Y);
        self.draw_scoreboards(fb, snap, x0, y0 + BOARD_Y);

        let help = CellStyle::fg(MUTED);
        fb.put_str_centered(
            x0,
            y0 + HELP_Y,
            CONTENT_WIDTH,
            "0-9 roll   X / Space all pins   R restart   Q quit",
            help,
        );
        if snap.game_over {
            fb.put_str_centered(
                x0,
                y0 + GAME_OVER_Y,
                CONTENT_WIDTH,
                "GAME OVER - press R to play again",
                CellStyle::fg(NEON_PINK).bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        fb.put_str_centered(
            x0,
            y0 + TITLE_Y,
            CONTENT_WIDTH,
            "N E O N   B O W L",
            CellStyle::fg(NEON_PINK).bold(),
        );
        fb.put_str_centered(
            x0,
            y0 + TITLE_Y + 1,
            CONTENT_WIDTH,
            "ten frames against the machine",
            CellStyle::fg(NEON_CYAN).dim(),
        );
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        let text = banner_text(snap);
        let style = if snap.game_over {
            CellStyle::fg(GOLD).bold()
        } else if snap.bot_turn {
            CellStyle::fg(NEON_PINK).bold()
        } else {
            CellStyle::fg(NEON_CYAN).bold()
        };
        fb.put_str_centered(x0, y, CONTENT_WIDTH, &text, style);
    }

    fn draw_lane(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        let lane_x = x0 + (CONTENT_WIDTH - LANE_W) / 2;
        let floor = CellStyle::fg(TEXT).on(LANE);
        fb.fill_rect(lane_x + 1, y + 1, LANE_W - 2, LANE_H - 2, ' ', floor);
        fb.draw_box(lane_x, y, LANE_W, LANE_H, CellStyle::fg(NEON_CYAN));

        let deck_x = lane_x + 5;
        let standing = snap.lane.standing.min(PIN_COUNT) as usize;
        for (i, &(row, col)) in PIN_LAYOUT.iter().enumerate() {
            let (ch, style) = if i < standing {
                ('●', CellStyle::fg(Rgb::new(250, 250, 250)).on(LANE).bold())
            } else {
                ('·', CellStyle::fg(MUTED).on(LANE))
            };
            fb.put_char(deck_x + col, y + 1 + row, ch, style);
        }

        if let Some(progress) = snap.lane.ball_progress {
            // Three rows of approach below the deck, bottom to top.
            let climb = (progress.min(100) as u16 * 2) / 100;
            let ball_y = y + LANE_H - 2 - climb;
            fb.put_char(deck_x + 6, ball_y, '◉', CellStyle::fg(NEON_PINK).on(LANE).bold());
        }

        if let Some(call) = snap.lane.call {
            let style = match call {
                RollCall::Strike => CellStyle::fg(GOLD).bold(),
                RollCall::Spare => CellStyle::fg(NEON_CYAN).bold(),
                RollCall::Gutter => CellStyle::fg(RED).bold(),
                RollCall::Pins(_) => CellStyle::fg(TEXT).bold(),
            };
            let label = call.label();
            fb.put_str_centered(x0, y + CALLOUT_Y - LANE_Y, CONTENT_WIDTH, &label, style);
        }
    }

    fn draw_picker(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        if snap.game_over {
            return;
        }
        if snap.bot_turn {
            fb.put_str_centered(
                x0,
                y,
                CONTENT_WIDTH,
                "Bot is calculating...",
                CellStyle::fg(NEON_PINK).dim(),
            );
            return;
        }

        let top = snap.pins_remaining.min(PIN_COUNT);
        let chance = top_roll_mark(snap);
        let hint = match chance {
            Some(RollMark::Strike) => " STRIKE CHANCE",
            Some(RollMark::Spare) => " SPARE CHANCE",
            _ => "",
        };

        let width = 5 + 4 * (top as u16 + 1) + hint.len() as u16;
        let mut x = x0 + CONTENT_WIDTH.saturating_sub(width) / 2;
        let base = if snap.accepting_input {
            CellStyle::fg(TEXT)
        } else {
            CellStyle::fg(TEXT).dim()
        };
        x = fb.put_str(x, y, "ROLL ", CellStyle { bold: true, ..base });
        for pins in 0..=top {
            let style = if pins == top && !hint.is_empty() {
                CellStyle { fg: GOLD, bold: true, ..base }
            } else {
                base
            };
            fb.put_char(x, y, '[', style);
            fb.put_u32_right(x + 1 + u16::from(pins >= 10), y, pins as u32, style);
            fb.put_char(x + 2 + u16::from(pins >= 10), y, ']', style);
            x += 4;
        }
        fb.put_str(x, y, hint, CellStyle { fg: GOLD, ..base });
    }

    fn draw_scoreboards(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        let header = CellStyle::fg(MUTED);
        for i in 0..FRAME_COUNT {
            let cx = frame_x(x0, i);
            fb.put_u32_right(cx + 1 + u16::from(i + 1 >= 10), y, (i + 1) as u32, header);
        }
        fb.put_str(frame_x(x0, TENTH_FRAME) + TENTH_W + 1, y, "TOTAL", header);

        for (p, player) in snap.players.iter().enumerate() {
            let active = !snap.game_over && p == snap.current_player;
            self.draw_sheet(fb, player, active, x0, y + 1 + 3 * p as u16);
        }
    }

    fn draw_sheet(
        &self,
        fb: &mut FrameBuffer,
        player: &PlayerSnapshot,
        active: bool,
        x0: u16,
        y: u16,
    ) {
        let accent = if player.kind.is_bot() { NEON_PINK } else { NEON_CYAN };
        let name_style = if active {
            CellStyle::fg(accent).bold()
        } else {
            CellStyle::fg(accent).dim()
        };
        let grid = if active {
            CellStyle::fg(accent)
        } else {
            CellStyle::fg(MUTED)
        };
        let value = CellStyle::fg(TEXT);

        if active {
            fb.put_char(x0, y, '▶', name_style);
        }
        for (i, ch) in player.name.chars().take(NAME_W as usize - 2).enumerate() {
            fb.put_char(x0 + 1 + i as u16, y, ch, name_style);
        }

        for (i, frame) in player.frames.iter().enumerate() {
            let cx = frame_x(x0, i);
            fb.put_char(cx, y, '│', grid);
            fb.put_char(cx, y + 1, '│', grid);

            for (slot, mark) in frame_marks(frame, i).iter().enumerate() {
                let Some(mark) = mark else { continue };
                let style = match mark {
                    RollMark::Strike => CellStyle::fg(GOLD).bold(),
                    RollMark::Spare => CellStyle::fg(NEON_CYAN).bold(),
                    RollMark::Gutter => CellStyle::fg(MUTED),
                    RollMark::Pins(_) => value,
                };
                fb.put_str(cx + 1 + 2 * slot as u16, y, mark.symbol(), style);
            }

            if let Some(score) = frame.score() {
                let right = cx + frame_width(i) - 1;
                fb.put_u32_right(right, y + 1, score as u32, value);
            }
        }
        let close_x = frame_x(x0, TENTH_FRAME) + TENTH_W;
        fb.put_char(close_x, y, '│', grid);
        fb.put_char(close_x, y + 1, '│', grid);

        let total_right = close_x + 5;
        match player.frames[TENTH_FRAME].score() {
            Some(total) => fb.put_u32_right(total_right, y + 1, total as u32, value.bold()),
            None => {
                fb.put_str(total_right - 1, y + 1, "--", CellStyle::fg(MUTED));
            }
        }
    }
}

fn frame_x(x0: u16, frame_index: usize) -> u16 {
    x0 + NAME_W + FRAME_W * frame_index.min(TENTH_FRAME) as u16
}

fn frame_width(frame_index: usize) -> u16 {
    if frame_index == TENTH_FRAME {
        TENTH_W
    } else {
        FRAME_W
    }
}

/// Banner line: whose turn it is, or how the game ended.
pub fn banner_text(snap: &GameSnapshot) -> String {
    match snap.outcome {
        Some(Outcome::Winner(i)) => {
            let name = snap.players.get(i).map(|p| p.name.as_str()).unwrap_or("?");
            format!("{} WINS!", name.to_uppercase())
        }
        Some(Outcome::Tie) => "IT'S A TIE!".to_string(),
        None => format!(
            "{}'S TURN  Frame {}",
            snap.current().name.to_uppercase(),
            snap.current_frame + 1
        ),
    }
}

/// Mark the active player would get for knocking down everything standing.
fn top_roll_mark(snap: &GameSnapshot) -> Option<RollMark> {
    if snap.pins_remaining == 0 {
        return None;
    }
    let frame_index = snap.current_frame.min(TENTH_FRAME);
    let rolls = snap.current().frames[frame_index].rolls();
    if rolls.len() >= MAX_ROLLS_PER_FRAME {
        return None;
    }
    let mut next = [0u8; MAX_ROLLS_PER_FRAME];
    next[..rolls.len()].copy_from_slice(rolls);
    next[rolls.len()] = snap.pins_remaining;
    let frame = Frame::with_rolls(&next[..=rolls.len()]);
    roll_mark(&frame, rolls.len(), frame_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn strike_chance_on_fresh_rack() {
        let snap = GameState::default().snapshot();
        assert_eq!(top_roll_mark(&snap), Some(RollMark::Strike));
    }

    #[test]
    fn spare_chance_after_first_ball() {
        let mut state = GameState::default();
        state.submit_roll(0).unwrap();
        assert_eq!(top_roll_mark(&state.snapshot()), Some(RollMark::Spare));
    }

    #[test]
    fn banner_names_the_active_player() {
        let mut state = GameState::human_vs_bot("Ana", "Bot");
        assert_eq!(banner_text(&state.snapshot()), "ANA'S TURN  Frame 1");
        state.submit_roll(10).unwrap();
        assert_eq!(banner_text(&state.snapshot()), "BOT'S TURN  Frame 1");
    }

    #[test]
    fn frame_columns_line_up() {
        assert_eq!(frame_x(0, 0), NAME_W);
        assert_eq!(frame_x(0, 9), NAME_W + 45);
        assert_eq!(frame_x(0, 9) + TENTH_W + 5, CONTENT_WIDTH - 1);
    }
}
