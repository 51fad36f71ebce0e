//! Integration tests for the Food Finder game engine.
//!
//! These tests play complete games through the public API.

use food_finder_core::*;
use pretty_assertions::assert_eq;

fn game_with_food(x: i32, y: i32) -> GameState {
    GameState::with_food(GameConfig::default(), Position::new(x, y)).unwrap()
}

/// Check the invariants that must hold in every reachable state
fn assert_invariants(game: &GameState) {
    let config = game.config();
    assert!(game.player_pos().in_bounds(config.grid_size));
    assert!(game.food_pos().in_bounds(config.grid_size));
    assert!(game.steps() <= config.max_steps);
    assert_eq!(game.greedy_history().len() as u32, game.steps());
}

#[test]
fn test_three_greedy_moves_win() {
    let mut game = game_with_food(3, 0);

    let mut distances = vec![game.distance_to_food()];
    for _ in 0..3 {
        let outcome = game.move_player(Direction::Right);
        assert!(outcome.was_greedy());
        distances.push(game.distance_to_food());
    }

    assert_eq!(distances, vec![3, 2, 1, 0]);
    assert_eq!(game.steps(), 3);
    assert_eq!(
        game.evaluate(),
        Evaluation {
            status: GameStatus::Won,
            all_greedy: Some(true),
        }
    );
}

#[test]
fn test_food_on_start_is_an_immediate_win() {
    let mut game = game_with_food(0, 0);

    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.evaluate().all_greedy, Some(true));

    let outcome = game.move_player(Direction::Right);
    assert_eq!(
        outcome,
        MoveOutcome::Ignored {
            status: GameStatus::Won
        }
    );
    assert!(game.greedy_move().is_ignored());
    assert_eq!(game.steps(), 0);
    assert_eq!(game.player_pos(), Position::ORIGIN);
}

#[test]
fn test_blocked_move_is_not_greedy() {
    let mut game = game_with_food(5, 5);

    let outcome = game.move_player(Direction::Left);

    assert!(!outcome.was_greedy());
    assert_eq!(outcome.status(), GameStatus::Ongoing);
    assert_eq!(game.steps(), 1);
    assert_eq!(game.player_pos(), Position::ORIGIN);
    assert_eq!(game.greedy_history(), &[false]);
}

#[test]
fn test_step_cap_loses() {
    let mut game = game_with_food(9, 9);

    // Bounce off the top wall until the cap
    for _ in 0..15 {
        game.move_player(Direction::Up);
        assert_invariants(&game);
    }

    assert_eq!(game.steps(), 15);
    assert_eq!(
        game.evaluate(),
        Evaluation {
            status: GameStatus::Lost,
            all_greedy: None,
        }
    );
}

#[test]
fn test_terminal_state_rejects_moves() {
    let mut game = game_with_food(9, 9);
    for _ in 0..15 {
        game.move_player(Direction::Left);
    }
    assert!(game.is_finished());

    let before = game.snapshot();
    for direction in Direction::ALL {
        assert!(game.move_player(direction).is_ignored());
    }
    assert!(game.greedy_move().is_ignored());
    assert_eq!(game.apply_action(GameAction::GreedyMove), vec![GameEvent::MoveIgnored]);

    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_far_food_cannot_be_reached_greedily_in_time() {
    // Distance 18 exceeds the 15-step cap
    let mut game = game_with_food(9, 9);
    let mut agent = Agent::new(AgentStrategy::Greedy);

    let mut events = Vec::new();
    while let Some(action) = agent.choose_action(&game) {
        events.extend(game.apply_action(action));
    }

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.distance_to_food(), 3);
    assert_eq!(events.last(), Some(&GameEvent::OutOfMoves { steps: 15 }));
}

#[test]
fn test_greedy_moves_always_shorten_distance() {
    for seed in 0..50 {
        let mut game = GameState::with_seed(GameConfig::default(), seed).unwrap();
        while !game.is_finished() {
            let before = game.distance_to_food();
            let outcome = game.greedy_move();
            assert!(outcome.was_greedy());
            assert_eq!(game.distance_to_food(), before - 1);
            assert_invariants(&game);
        }
        assert!(game.greedy_history().iter().all(|&g| g));
    }
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = GameState::with_seed(GameConfig::default(), 9).unwrap();
    game.move_player(Direction::Down);
    game.greedy_move();
    game.move_player(Direction::Right);

    game.reset();

    assert_eq!(game.player_pos(), Position::ORIGIN);
    assert_eq!(game.steps(), 0);
    assert!(game.greedy_history().is_empty());
    assert!(game.food_pos().in_bounds(GRID_SIZE));
    assert_invariants(&game);
}

#[test]
fn test_reset_after_loss_accepts_moves_again() {
    let config = GameConfig::new(4, 2).unwrap();
    let mut game = GameState::with_food(config, Position::new(3, 3)).unwrap();
    game.move_player(Direction::Up);
    game.move_player(Direction::Up);
    assert_eq!(game.status(), GameStatus::Lost);

    game.reset();

    // The new food may land on the origin, which is an immediate win
    if game.food_pos() == Position::ORIGIN {
        assert_eq!(game.status(), GameStatus::Won);
    } else {
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(!game.move_player(Direction::Right).is_ignored());
    }
}

#[test]
fn test_seeded_resets_are_reproducible() {
    let mut a = GameState::with_seed(GameConfig::default(), 1234).unwrap();
    let mut b = GameState::with_seed(GameConfig::default(), 1234).unwrap();

    for _ in 0..10 {
        assert_eq!(a.food_pos(), b.food_pos());
        a.reset();
        b.reset();
    }
}

#[test]
fn test_random_play_keeps_invariants() {
    for seed in 0..20 {
        let mut game = GameState::with_seed(GameConfig::default(), seed).unwrap();
        let mut agent = Agent::with_seed(AgentStrategy::Random, seed);

        while let Some(action) = agent.choose_action(&game) {
            game.apply_action(action);
            assert_invariants(&game);
        }

        assert!(game.is_finished());
    }
}

#[test]
fn test_distance_properties() {
    let points = [
        Position::new(0, 0),
        Position::new(9, 0),
        Position::new(4, 7),
        Position::new(2, 2),
    ];
    for a in points {
        assert_eq!(distance(a, a), 0);
        for b in points {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}
