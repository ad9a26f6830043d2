//! Match orchestration tests: lifecycle, log format and move providers.

use amazons::core::{Move, Player, State};
use amazons::error::{GameError, IllegalMove, RulesError};
use amazons::game::{Game, GameConfig, LogEntry, MatchStatus, ProviderMove, RandomPlayer, ScriptedPlayer};
use serde_json::Value;

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_new_game_rejects_bad_player() {
    for code in [0, 2, -2, i8::MIN, i8::MAX] {
        assert_eq!(Game::new(code).err(), Some(RulesError::InvalidPlayer(code)));
    }
}

#[test]
fn test_start_twice_replays_from_opening() {
    let mut game = Game::new(1).unwrap();
    let first = game.start().unwrap();
    let second = game.start().unwrap();

    assert_eq!(first[0].game_state, State::initial(Player::Second));
    assert_eq!(second[0].game_state, State::initial(Player::Second));
    assert!(first.last().unwrap().is_final());
    assert!(second.last().unwrap().is_final());
}

#[test]
fn test_reset_switches_first_player() {
    let mut game = Game::with_config(GameConfig::default().with_seed(11));
    let blue_first = game.start().unwrap();

    game.reset(1).unwrap();
    assert_eq!(game.winner(), None);
    let red_first = game.start().unwrap();

    assert_eq!(blue_first[0].game_state.current_player(), Player::First);
    assert_eq!(red_first[0].game_state.current_player(), Player::Second);
}

// =============================================================================
// Log Format
// =============================================================================

#[test]
fn test_log_json_shape() {
    let mut game = Game::with_config(GameConfig::default().with_seed(17));
    let log = game.start().unwrap();
    let last = log.len() - 1;

    for (i, entry) in log.iter().enumerate() {
        let json: Value = serde_json::from_str(&entry.to_json().unwrap()).unwrap();

        let board = json["game_state"]["board"].as_array().unwrap();
        assert_eq!(board.len(), 100);
        assert_eq!(board.iter().filter(|c| c.as_i64() == Some(2)).count(), i);

        let to_move = if i % 2 == 0 { -1 } else { 1 };
        assert_eq!(json["game_state"]["current_player"], to_move);

        if i == last {
            assert_eq!(json["status"], 1);
            assert_eq!(json["winner"], -to_move);
        } else {
            assert_eq!(json["status"], 0);
            assert_eq!(json["winner"], 0);
        }
    }
}

#[test]
fn test_log_entries_parse_back() {
    let mut game = Game::with_config(GameConfig::default().with_seed(23));
    let log = game.start().unwrap();

    let lines: Vec<String> = log.iter().map(|e| e.to_json().unwrap()).collect();
    let parsed: Vec<LogEntry> = lines.iter().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(parsed, log);
    assert_eq!(parsed.last().unwrap().status, MatchStatus::Finished);
}

// =============================================================================
// Move Providers
// =============================================================================

#[test]
fn test_scripted_opening() {
    let blue = [Move::new(3, 33, 43), Move::new(33, 23, 3)];
    let red = [Move::new(60, 50, 40)];

    let mut game = Game::new(-1)
        .unwrap()
        .with_provider(Player::First, ScriptedPlayer::new(blue))
        .with_provider(Player::Second, ScriptedPlayer::new(red));
    let log = game.start().unwrap();

    let after_one = State::initial(Player::First).apply_move(blue[0]).unwrap();
    let after_two = after_one.apply_move(red[0]).unwrap();
    let after_three = after_two.apply_move(blue[1]).unwrap();

    assert_eq!(log[1].game_state, after_one);
    assert_eq!(log[2].game_state, after_two);
    assert_eq!(log[3].game_state, after_three);
    assert!(log.last().unwrap().is_final());
}

#[test]
fn test_provider_violation_halts_match() {
    // The second scripted move starts from a cell the queen already left.
    let blue = [Move::new(3, 33, 43), Move::new(3, 13, 23)];
    let red = [Move::new(60, 50, 40)];
    let mut game = Game::new(-1)
        .unwrap()
        .with_provider(Player::First, ScriptedPlayer::new(blue))
        .with_provider(Player::Second, ScriptedPlayer::new(red));

    match game.start() {
        Err(GameError::ProviderViolation { player, source }) => {
            assert_eq!(player, Player::First);
            assert_eq!(
                source,
                RulesError::IllegalMove {
                    mv: blue[1],
                    reason: IllegalMove::NoQueen(3),
                }
            );
        }
        other => panic!("expected provider violation, got {other:?}"),
    }
    assert_eq!(game.state().ply(), 2);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_opponent_queen_is_a_violation() {
    let mut game = Game::new(-1)
        .unwrap()
        .with_provider(Player::First, |_: &State| ProviderMove::Play(Move::new(93, 83, 73)));

    let err = game.play_ply().unwrap_err();
    assert!(matches!(
        err,
        GameError::ProviderViolation {
            source: RulesError::IllegalMove {
                reason: IllegalMove::WrongOwner { cell: 93, owner: Player::Second },
                ..
            },
            ..
        }
    ));
}

#[test]
fn test_random_players_are_reproducible() {
    let play = || {
        Game::new(-1)
            .unwrap()
            .with_provider(Player::First, RandomPlayer::new(1))
            .with_provider(Player::Second, RandomPlayer::new(2))
            .start()
            .unwrap()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_game_error_display() {
    let mut game = Game::new(-1)
        .unwrap()
        .with_provider(Player::First, |_: &State| ProviderMove::Play(Move::new(3, 3, 13)));

    let err = game.start().unwrap_err();
    assert!(err.to_string().starts_with("move provider for blue (-1) broke its contract"));
}
