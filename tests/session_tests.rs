use neon_bowl::core::{GameState, Outcome, RollError};
use neon_bowl::engine::{BotRoller, Phase, Session, SessionConfig};
use neon_bowl::types::{RollCall, BOT_THINK_MS, ROLL_REVEAL_MS, TICK_MS, TURN_HANDOFF_MS};

fn instant(bot: impl FnMut(u8) -> u8 + 'static) -> Session {
    Session::new(GameState::default(), SessionConfig::instant(), Box::new(bot))
}

/// Tick until a roll lands, returning how many ticks it took.
fn ticks_until_roll(session: &mut Session, step: u32, limit: usize) -> Option<usize> {
    (1..=limit).find(|_| session.tick(step).is_some())
}

#[test]
fn roll_lands_after_reveal_at_tick_rate() {
    let mut session = Session::new(
        GameState::default(),
        SessionConfig::default(),
        Box::new(|_: u8| -> u8 { 0 }),
    );
    session.submit_roll(5).unwrap();
    let ticks = ticks_until_roll(&mut session, TICK_MS, 1000).unwrap();
    assert_eq!(ticks as u32, ROLL_REVEAL_MS.div_ceil(TICK_MS));
}

#[test]
fn human_input_is_closed_for_the_whole_bot_turn() {
    let mut session = Session::new(
        GameState::default(),
        SessionConfig::default(),
        Box::new(|_: u8| -> u8 { 2 }),
    );
    session.submit_roll(1).unwrap();
    session.tick(ROLL_REVEAL_MS);
    session.submit_roll(1).unwrap();
    let event = session.tick(ROLL_REVEAL_MS).unwrap();
    assert!(event.turn_passed);

    // Handoff, think, two bot rolls: every human key is turned away.
    let mut bot_rolls = 0;
    for _ in 0..1000 {
        if session.accepting_input() {
            break;
        }
        let err = session.submit_roll(3).unwrap_err();
        assert!(err.is_out_of_turn(), "{err:?}");
        if let Some(event) = session.tick(TICK_MS) {
            assert_eq!(event.player, 1);
            bot_rolls += 1;
        }
    }
    assert_eq!(bot_rolls, 2);
    assert_eq!(session.state().current_player_index(), 0);
    assert_eq!(session.state().current_frame_index(0), 1);
}

#[test]
fn handoff_then_think_delays_the_bot() {
    let mut session = Session::new(
        GameState::default(),
        SessionConfig::default(),
        Box::new(|standing: u8| -> u8 { standing }),
    );
    session.submit_all().unwrap();
    session.tick(ROLL_REVEAL_MS).unwrap();

    session.tick(TURN_HANDOFF_MS);
    session.tick(BOT_THINK_MS - 1);
    assert_eq!(session.phase(), Phase::AwaitingRoll);
    session.tick(1);
    assert_eq!(
        session.phase(),
        Phase::Rolling {
            pins: 10,
            remaining_ms: ROLL_REVEAL_MS
        }
    );
}

#[test]
fn knock_all_clears_what_is_standing() {
    let mut session = instant(|_: u8| -> u8 { 0 });
    session.submit_roll(3).unwrap();
    session.tick(0);
    session.submit_all().unwrap();
    let event = session.tick(0).unwrap();
    assert_eq!(event.pins, 7);
    assert_eq!(event.call, RollCall::Spare);
}

#[test]
fn full_game_against_scripted_bot() {
    let mut session = instant(|standing: u8| -> u8 { if standing == 10 { 9 } else { 0 } });
    let mut guard = 0;
    while session.phase() != Phase::GameOver {
        guard += 1;
        assert!(guard < 10_000, "game did not finish");
        if session.accepting_input() {
            session.submit_all().unwrap();
        }
        session.tick(TICK_MS);
    }

    let state = session.state();
    assert_eq!(state.players()[0].total(), 300);
    assert_eq!(state.players()[1].total(), 90);
    assert_eq!(state.winner(), Some(Outcome::Winner(0)));
    assert_eq!(session.submit_roll(0), Err(RollError::GameOver));
    assert!(session.snapshot().game_over);
}

#[test]
fn seeded_bot_games_are_reproducible() {
    let play = |seed: u32| {
        let mut session = Session::new(
            GameState::default(),
            SessionConfig::instant(),
            Box::new(BotRoller::new(seed)),
        );
        for _ in 0..10_000 {
            if session.phase() == Phase::GameOver {
                break;
            }
            if session.accepting_input() {
                session.submit_roll(0).unwrap();
            }
            session.tick(TICK_MS);
        }
        session.state().players()[1].frames().clone()
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn restart_mid_bot_turn_returns_lane_to_human() {
    let mut session = instant(|_: u8| -> u8 { 4 });
    session.submit_roll(10).unwrap();
    session.tick(0);
    session.tick(0); // bot picks up the ball
    assert!(session.is_rolling());

    session.restart();
    assert!(session.accepting_input());
    assert_eq!(session.state().roll_count(), 0);
    assert_eq!(session.tick(0), None);
}
