//! Rules engine integration tests: invariants checked along random matches.

use std::sync::Arc;

use proptest::prelude::*;

use truco_mcts::cards::{Card, Deck, Rank, Suit};
use truco_mcts::core::{Action, GameRng, PlayerId, RulesConfig, TrucoError};
use truco_mcts::mcts::{RandomSimulation, SimulationPolicy};
use truco_mcts::rules::{GameState, GameStateBuilder, Phase};

fn new_match(deck_seed: u64, target: u32) -> GameState {
    GameState::new(
        Arc::new(Deck::with_seed(deck_seed)),
        RulesConfig::default().with_target_score(target),
    )
}

/// Actions that are never legal in `state`'s phase.
fn out_of_phase(state: &GameState) -> Vec<Action> {
    match state.phase() {
        Phase::Playing => vec![Action::Accept, Action::Decline],
        Phase::RaiseCalled { .. } => state
            .hand(state.to_move())
            .iter()
            .map(|&c| Action::Play(c))
            .collect(),
        Phase::GameOver { .. } => vec![Action::Raise],
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_walk_keeps_invariants(deck_seed in any::<u64>(), walk_seed in any::<u64>(), target in 1u32..=12) {
        let mut state = new_match(deck_seed, target);
        let mut rng = GameRng::new(walk_seed);
        let limit = state.rules().max_match_actions();

        for _ in 0..=limit {
            prop_assert!(state.is_conserved());

            let actions = state.legal_actions();
            prop_assert_eq!(actions.is_empty(), state.is_game_over());
            prop_assert_eq!(state.game_result().is_some(), state.is_game_over());
            if state.is_game_over() {
                break;
            }

            for bad in out_of_phase(&state) {
                prop_assert_eq!(
                    state.do_action(&bad).unwrap_err(),
                    TrucoError::IllegalAction { action: bad }
                );
            }

            let action = *rng.choose(&actions).unwrap();
            state = state.do_action(&action).unwrap();
        }

        prop_assert!(state.is_game_over());
        let result = state.game_result().unwrap();
        prop_assert!(state.score(result.winner) >= target);
        prop_assert!(state.score(result.winner.opponent()) < target);
    }

    #[test]
    fn prop_every_legal_action_applies(deck_seed in any::<u64>(), steps in 0usize..40, walk_seed in any::<u64>()) {
        let mut state = new_match(deck_seed, 12);
        let mut rng = GameRng::new(walk_seed);
        for _ in 0..steps {
            let actions = state.legal_actions();
            match rng.choose(&actions) {
                Some(action) => state = state.do_action(action).unwrap(),
                None => break,
            }
        }

        for action in state.legal_actions() {
            let next = state.do_action(&action).unwrap();
            prop_assert!(next.is_conserved());
            prop_assert_eq!(next.match_player(), state.match_player());
        }
    }

    #[test]
    fn prop_rollouts_terminate(deck_seed in any::<u64>(), rollout_seed in any::<u64>()) {
        let state = new_match(deck_seed, 12);
        let result = RandomSimulation.simulate(&state, &mut GameRng::new(rollout_seed));
        prop_assert!(result.is_ok());
    }
}

// =============================================================================
// Decks
// =============================================================================

#[test]
fn test_fresh_decks_same_cards_different_order() {
    let a = Deck::new();
    let b = Deck::new();

    let mut sorted_a = a.cards().to_vec();
    let mut sorted_b = b.cards().to_vec();
    sorted_a.sort();
    sorted_b.sort();

    assert_eq!(sorted_a.len(), 40);
    assert_eq!(sorted_a, sorted_b);
    assert!(sorted_a.windows(2).all(|w| w[0] != w[1]));
    assert_ne!(a.cards(), b.cards());
}

#[test]
fn test_same_deck_same_match() {
    let deck = Arc::new(Deck::with_seed(99));
    let mut one = GameState::new(deck.clone(), RulesConfig::default());
    let mut two = GameState::new(deck, RulesConfig::default());

    // Decline every raise, play the first card otherwise: fully deterministic.
    while !one.is_game_over() {
        let action = one
            .legal_actions()
            .into_iter()
            .find(|a| matches!(a, Action::Play(_) | Action::Decline))
            .unwrap();
        one = one.do_action(&action).unwrap();
        two = two.do_action(&action).unwrap();
        assert_eq!(one.vira(), two.vira());
        assert_eq!(one.hand(PlayerId::ONE), two.hand(PlayerId::ONE));
    }
    assert_eq!(one.scores(), two.scores());
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_tied_first_trick_decided_by_second() {
    let vira = Card::new(Rank::Four, Suit::Diamonds);
    let state = GameStateBuilder::new(vira)
        .hand(
            PlayerId::ONE,
            &[Card::new(Rank::Three, Suit::Clubs), Card::new(Rank::Six, Suit::Clubs)],
        )
        .hand(
            PlayerId::TWO,
            &[Card::new(Rank::Three, Suit::Hearts), Card::new(Rank::Seven, Suit::Clubs)],
        )
        .build()
        .unwrap();

    let state = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Clubs),
    ]
    .iter()
    .fold(state, |s, &c| s.do_action(&Action::Play(c)).unwrap());

    assert_eq!(state.score(PlayerId::TWO), 1);
    assert_eq!(state.score(PlayerId::ONE), 0);
    assert_eq!(state.hand_number(), 1);
    assert!(state.is_conserved());
}

#[test]
fn test_declined_raise_pays_caller() {
    let state = new_match(4, 12);
    let raiser = state.to_move();

    let state = state
        .do_action(&Action::Raise)
        .unwrap()
        .do_action(&Action::Decline)
        .unwrap();

    assert_eq!(state.score(raiser), 1);
    assert_eq!(state.score(raiser.opponent()), 0);
}
