use neon_bowl::core::{GameState, Outcome, RollError};
use neon_bowl::types::RollCall;
use proptest::prelude::*;

fn roll_all(game: &mut GameState, rolls: &[u8]) {
    for &pins in rolls {
        game.submit_roll(pins).unwrap();
    }
}

#[test]
fn open_frames_alternate_players() {
    let mut game = GameState::default();
    roll_all(&mut game, &[3, 4]);
    assert_eq!(game.current_player_index(), 1);
    roll_all(&mut game, &[5, 2]);
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.current_frame_index(0), 1);
    assert_eq!(game.current_frame_index(1), 1);
    assert_eq!(game.players()[0].total(), 7);
    assert_eq!(game.players()[1].total(), 7);
}

#[test]
fn rejected_roll_changes_nothing() {
    let mut game = GameState::default();
    game.submit_roll(8).unwrap();
    let before = game.clone();

    let err = game.submit_roll(3).unwrap_err();
    assert_eq!(err, RollError::TooManyPins { pins: 3, remaining: 2 });
    assert_eq!(err.to_string(), "cannot knock down 3 pins with only 2 standing");
    assert_eq!(game, before);
}

#[test]
fn tenth_frame_strike_keeps_the_lane() {
    let mut game = GameState::default();
    for _ in 0..9 {
        roll_all(&mut game, &[0, 0, 0, 0]);
    }
    let first = game.submit_roll(10).unwrap();
    assert!(!first.turn_passed);
    assert_eq!(game.pins_remaining(), 10);

    let second = game.submit_roll(4).unwrap();
    assert!(!second.turn_passed);
    assert_eq!(game.pins_remaining(), 6);

    let third = game.submit_roll(6).unwrap();
    assert_eq!(third.call, RollCall::Spare);
    assert!(third.turn_passed);
    assert_eq!(game.players()[0].frames()[9].score(), Some(20));
}

#[test]
fn tenth_frame_gutter_then_ten_is_a_spare() {
    let mut game = GameState::default();
    for _ in 0..9 {
        roll_all(&mut game, &[0, 0, 0, 0]);
    }
    game.submit_roll(0).unwrap();
    let event = game.submit_roll(10).unwrap();
    assert_eq!(event.call, RollCall::Spare);
    assert!(!event.frame_complete);
    assert_eq!(game.pins_remaining(), 10);
}

#[test]
fn tie_when_final_scores_match() {
    let mut game = GameState::default();
    for _ in 0..10 {
        roll_all(&mut game, &[4, 4, 4, 4]);
    }
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Outcome::Tie));
}

#[test]
fn bot_wins_with_higher_score() {
    let mut game = GameState::default();
    for _ in 0..9 {
        roll_all(&mut game, &[1, 1, 10]);
    }
    roll_all(&mut game, &[1, 1, 10, 10, 10]);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Outcome::Winner(1)));
    assert_eq!(game.players()[1].total(), 300);
    assert_eq!(game.submit_roll(0), Err(RollError::GameOver));
}

#[test]
fn restart_resets_sheets_but_keeps_names() {
    let mut game = GameState::human_vs_bot("Ana", "Robo");
    roll_all(&mut game, &[10, 9]);
    game.restart();
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.players()[0].name(), "Ana");
    assert_eq!(game.players()[0].total(), 0);
    assert!(!game.is_game_over());
}

/// One player's complete legal game from arbitrary draws.
fn legal_game(draws: &[u8]) -> Vec<u8> {
    let mut draws = draws.iter().copied();
    let mut next = |standing: u8| -> u8 { draws.next().unwrap_or(0) % (standing + 1) };
    let mut rolls = Vec::new();
    for _ in 0..9 {
        let first = next(10);
        rolls.push(first);
        if first < 10 {
            rolls.push(next(10 - first));
        }
    }
    let first = next(10);
    let second = if first == 10 { next(10) } else { next(10 - first) };
    rolls.extend([first, second]);
    if first == 10 || first + second == 10 {
        let standing = if first == 10 && second < 10 { 10 - second } else { 10 };
        rolls.push(next(standing));
    }
    rolls
}

proptest! {
    #[test]
    fn interleaved_games_end_together(
        human in prop::collection::vec(any::<u8>(), 21),
        bot in prop::collection::vec(any::<u8>(), 21),
    ) {
        let sheets = [legal_game(&human), legal_game(&bot)];
        let mut cursor = [0usize; 2];
        let mut game = GameState::default();

        while !game.is_game_over() {
            let p = game.current_player_index();
            prop_assert!(cursor[p] < sheets[p].len(), "player {} ran out of rolls", p);
            let frame_before = game.current_frame_index(p);
            let event = game.submit_roll(sheets[p][cursor[p]]).unwrap();
            cursor[p] += 1;

            prop_assert_eq!(event.player, p);
            prop_assert_eq!(event.frame_index, frame_before);
            if event.turn_passed {
                prop_assert!(event.frame_complete);
                prop_assert_eq!(game.current_player_index(), 1 - p);
            } else if !event.game_over {
                prop_assert_eq!(game.current_player_index(), p);
            }
        }

        prop_assert_eq!(cursor[0], sheets[0].len());
        prop_assert_eq!(cursor[1], sheets[1].len());

        let finals = game.players().each_ref().map(|pl| pl.frames()[9].score());
        prop_assert!(finals.iter().all(|s| s.is_some()));
        let expected = match finals[0].cmp(&finals[1]) {
            std::cmp::Ordering::Greater => Outcome::Winner(0),
            std::cmp::Ordering::Less => Outcome::Winner(1),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        prop_assert_eq!(game.winner(), Some(expected));
    }
}
