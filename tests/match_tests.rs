//! Match orchestration integration tests.

use std::sync::Arc;

use truco_mcts::cards::{Deck, DeckPool};
use truco_mcts::core::{RulesConfig, TrucoError};
use truco_mcts::mcts::MCTSConfig;
use truco_mcts::play::{run_match, Match};
use truco_mcts::strategy::{build_strategy, StrategyKind, StrategySettings, StrategySpec};

fn settings(iterations: u32) -> StrategySettings {
    StrategySettings::default()
        .with_mcts(MCTSConfig::default().with_iterations(iterations))
        .with_seed(17)
}

#[test]
fn test_run_match_between_every_pairing() {
    let algorithms = ["RANDOM", "BASELINE", "MONTE_CARLO"];
    let rules = RulesConfig::default().with_target_score(5);
    let settings = settings(30);

    let mut pool = DeckPool::new();
    pool.populate(algorithms.len() * algorithms.len(), 1);

    for one in algorithms {
        for two in algorithms {
            let result = run_match(
                build_strategy(&StrategySpec::new(one, format!("{one}-1")), &settings),
                build_strategy(&StrategySpec::new(two, format!("{two}-2")), &settings),
                &mut pool,
                &rules,
            )
            .unwrap();

            assert!(result.winner_summary().score >= 5);
            assert_eq!(result.seats[0].kind, StrategyKind::from_algorithm(one));
            assert_eq!(result.seats[1].kind, StrategyKind::from_algorithm(two));
            assert!(result.winner == format!("{one}-1") || result.winner == format!("{two}-2"));
            assert!(result.hands_played >= 1);
            assert!(result.actions_taken <= rules.max_match_actions());
        }
    }

    assert!(pool.is_empty());
}

#[test]
fn test_pool_exhaustion() {
    let mut pool = DeckPool::new();
    pool.populate(1, 3);
    let rules = RulesConfig::default().with_target_score(2);
    let settings = settings(10);
    let spec = StrategySpec::new("BASELINE", "b");

    run_match(
        build_strategy(&spec, &settings),
        build_strategy(&spec, &settings),
        &mut pool,
        &rules,
    )
    .unwrap();

    let err = run_match(
        build_strategy(&spec, &settings),
        build_strategy(&spec, &settings),
        &mut pool,
        &rules,
    )
    .unwrap_err();
    assert_eq!(err, TrucoError::DeckPoolExhausted);

    pool.populate(2, 3);
    assert_eq!(pool.len(), 2);
    pool.clear();
    assert!(pool.is_empty());
}

#[test]
fn test_same_deck_same_result() {
    let deck = Arc::new(Deck::with_seed(2024));
    let rules = RulesConfig::default().with_target_score(4);
    let settings = settings(40);
    let mcts = StrategySpec::new("MONTE_CARLO", "mcts");
    let random = StrategySpec::new("RANDOM", "random");

    let play = || {
        Match::new(
            build_strategy(&mcts, &settings),
            build_strategy(&random, &settings),
            deck.clone(),
            rules,
        )
        .play()
        .unwrap()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_saved_pool_replays_matches() {
    let mut pool = DeckPool::new();
    pool.populate(3, 8);
    let mut copy = DeckPool::from_bytes(&pool.to_bytes().unwrap()).unwrap();

    let rules = RulesConfig::default().with_target_score(3);
    let settings = settings(10);
    let spec = StrategySpec::new("RANDOM", "r");

    for _ in 0..3 {
        let a = run_match(
            build_strategy(&spec, &settings),
            build_strategy(&spec, &settings),
            &mut pool,
            &rules,
        )
        .unwrap();
        let b = run_match(
            build_strategy(&spec, &settings),
            build_strategy(&spec, &settings),
            &mut copy,
            &rules,
        )
        .unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_match_result_serializes() {
    let mut pool = DeckPool::new();
    pool.populate(1, 5);
    let settings = settings(10);

    let result = run_match(
        build_strategy(&StrategySpec::new("RANDOM", "r"), &settings),
        build_strategy(&StrategySpec::new("BASELINE", "b"), &settings),
        &mut pool,
        &RulesConfig::default(),
    )
    .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"winner\""));
    assert!(json.contains("\"BASELINE\""));
}
