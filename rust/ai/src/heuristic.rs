//! Heuristic policy: a coarse preflop strength estimate drives a small
//! decision ladder. Deliberately simple; it never looks at the board.

use felt_engine::cards::{Card, Rank};
use felt_engine::seat::Action;
use felt_engine::table::TableState;

use crate::{Decision, Policy};

/// Rule-based policy estimating strength from the two hole cards only:
/// pairs, high cards (Queen or better), suitedness, and closeness in
/// rank. Strong hands raise, medium hands call, weak hands fold unless
/// the price is small.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for HeuristicPolicy {
    fn decide(&self, state: &TableState, seat_id: usize) -> Decision {
        let Some(seat) = state.seats.iter().find(|s| s.id == seat_id) else {
            return Decision::of(Action::Fold);
        };
        if seat.is_folded || seat.is_all_in {
            return Decision::of(Action::Fold);
        }

        let call_amount = state.current_bet.saturating_sub(seat.current_bet);
        let strength = estimate_strength(&seat.hole_cards);

        // Calling costs the whole stack: only continue with a real hand.
        if seat.chips <= call_amount {
            return if strength > 0.3 {
                Decision::of(Action::Call)
            } else {
                Decision::of(Action::Fold)
            };
        }

        if strength > 0.7 {
            return Decision {
                action: Action::Raise,
                raise_amount: Some(suggest_raise(state.big_blind, seat.chips)),
            };
        }

        if strength > 0.4 {
            return if call_amount == 0 {
                Decision::of(Action::Check)
            } else {
                Decision::of(Action::Call)
            };
        }

        if call_amount == 0 {
            return Decision::of(Action::Check);
        }

        // Weak hand: call only when the price is under 10% of the stack.
        if (call_amount as f32) / (seat.chips as f32) < 0.1 {
            Decision::of(Action::Call)
        } else {
            Decision::of(Action::Fold)
        }
    }

    fn name(&self) -> &str {
        "HeuristicPolicy"
    }
}

/// Coarse strength of two hole cards on a 0.0..=1.0 scale. The board is
/// ignored entirely.
pub fn estimate_strength(hole_cards: &[Card]) -> f32 {
    if hole_cards.len() < 2 {
        return 0.0;
    }
    let r1 = hole_cards[0].rank as u8;
    let r2 = hole_cards[1].rank as u8;

    let is_pair = hole_cards[0].rank == hole_cards[1].rank;
    let high_card = r1.max(r2);
    let suited = hole_cards[0].suit == hole_cards[1].suit;
    let connected = r1.abs_diff(r2) <= 4;

    let mut strength: f32 = 0.3;
    if is_pair {
        strength += 0.3;
    }
    if high_card >= Rank::Queen as u8 {
        strength += 0.2;
    }
    if suited {
        strength += 0.1;
    }
    if connected {
        strength += 0.1;
    }
    strength.min(1.0)
}

/// Raise size: between one and three big blinds, capped at 30% of the
/// stack within that band.
fn suggest_raise(big_blind: u32, chips: u32) -> u32 {
    let cap = ((chips as u64 * 3) / 10) as u32;
    big_blind.max((big_blind * 3).min(cap))
}
