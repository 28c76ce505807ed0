//! Neon Bowl terminal runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `neon_bowl::term`.
//! Model time advances in fixed `TICK_MS` steps; input is polled in between.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use neon_bowl::config::Args;
use neon_bowl::core::{GameSnapshot, GameState, RollError};
use neon_bowl::engine::{BotRoller, Session};
use neon_bowl::input::{handle_key_event, should_quit};
use neon_bowl::logging;
use neon_bowl::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use neon_bowl::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_config())?;

    let seed = args.resolved_seed();
    info!(seed, name = %args.name, bot = %args.bot_name, "starting");
    let session = Session::new(
        GameState::human_vs_bot(args.name.clone(), args.bot_name.clone()),
        args.session_config(),
        Box::new(BotRoller::new(seed)),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut session, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}

fn apply_action(session: &mut Session, action: GameAction) {
    let result = match action {
        GameAction::Roll(pins) => session.submit_roll(pins),
        GameAction::KnockAll => session.submit_all(),
        GameAction::Restart => {
            session.restart();
            Ok(())
        }
    };
    match result {
        Ok(()) => {}
        // Keys pressed while the lane is busy are dropped without feedback.
        Err(err) if err.is_out_of_turn() => {}
        Err(RollError::TooManyPins { pins, remaining }) => {
            debug!(pins, remaining, "roll exceeds standing pins");
        }
        Err(err) => debug!(%err, "action rejected"),
    }
}
