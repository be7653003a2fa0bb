use felt_ai::{create_policy, Policy};
use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::seat::Action;
use felt_engine::table::TableState;

use felt_ai::heuristic::{estimate_strength, HeuristicPolicy};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

/// 3-seat preflop table with seat 0 to act, owing a 20-chip call.
fn preflop_table() -> TableState {
    TableState::with_seed(10, 20, 1000, 3, 41)
        .start_hand()
        .unwrap()
}

#[test]
fn strength_rewards_pairs_high_cards_and_texture() {
    let aces = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ];
    let suited_broadway = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
    ];
    let junk = [
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Two, Suit::Clubs),
    ];

    let s_aces = estimate_strength(&aces);
    let s_broadway = estimate_strength(&suited_broadway);
    let s_junk = estimate_strength(&junk);

    assert!(s_aces > s_broadway);
    assert!(s_broadway > s_junk);
    assert!((s_junk - 0.3).abs() < f32::EPSILON);
    assert_eq!(estimate_strength(&aces[..1]), 0.0);
}

#[test]
fn strong_hand_raises_within_the_sizing_band() {
    let mut table = preflop_table();
    table.seats[0].hole_cards = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ];

    let decision = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(decision.action, Action::Raise);
    // Three big blinds, well under 30% of the stack.
    assert_eq!(decision.raise_amount, Some(60));
}

#[test]
fn raise_size_is_capped_by_a_short_stack() {
    let mut table = preflop_table();
    table.seats[0].hole_cards = vec![
        card(Rank::King, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
    ];
    table.seats[0].chips = 100;

    let decision = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(decision.action, Action::Raise);
    // 30% of 100 chips beats three big blinds; one big blind is the floor.
    assert_eq!(decision.raise_amount, Some(30));
}

#[test]
fn suited_connected_broadway_raises() {
    // A♠K♠ collects every bonus and lands above the raise threshold.
    let mut table = preflop_table();
    table.seats[0].hole_cards = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Spades),
    ];

    let decision = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(decision.action, Action::Raise);
}

#[test]
fn medium_hand_calls_or_checks() {
    // Offsuit A-K: high card and connected, but no pair or suit bonus.
    let mut table = preflop_table();
    let broadway = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ];

    table.seats[0].hole_cards = broadway.clone();
    let facing_bet = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(facing_bet.action, Action::Call);

    // The big blind already matches the table bet.
    table.seats[2].hole_cards = broadway;
    let free = HeuristicPolicy::new().decide(&table, 2);
    assert_eq!(free.action, Action::Check);
}

#[test]
fn weak_hand_folds_unless_the_price_is_small() {
    let mut table = preflop_table();
    let junk = vec![
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Two, Suit::Clubs),
    ];

    // 20 chips into a 980 stack is cheap enough to peel.
    table.seats[0].hole_cards = junk.clone();
    let cheap = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(cheap.action, Action::Call);

    table.seats[0].chips = 150;
    let pricey = HeuristicPolicy::new().decide(&table, 0);
    assert_eq!(pricey.action, Action::Fold);
}

#[test]
fn calling_for_the_whole_stack_needs_a_real_hand() {
    let mut table = preflop_table();
    table.seats[0].chips = 20;

    table.seats[0].hole_cards = vec![
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Two, Suit::Clubs),
    ];
    assert_eq!(HeuristicPolicy::new().decide(&table, 0).action, Action::Fold);

    table.seats[0].hole_cards = vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(HeuristicPolicy::new().decide(&table, 0).action, Action::Call);
}

#[test]
fn seats_that_cannot_act_fold() {
    let mut table = preflop_table();
    let policy = HeuristicPolicy::new();

    assert_eq!(policy.decide(&table, 99).action, Action::Fold);

    table.seats[1].is_folded = true;
    assert_eq!(policy.decide(&table, 1).action, Action::Fold);

    table.seats[2].is_all_in = true;
    assert_eq!(policy.decide(&table, 2).action, Action::Fold);
}

#[test]
fn factory_builds_the_heuristic_policy() {
    let policy = create_policy("heuristic");
    assert_eq!(policy.name(), "HeuristicPolicy");
}
