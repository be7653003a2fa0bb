use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A betting action as submitted by a caller. Raise sizing travels
/// separately so a bare raise can default to the big blind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pass without betting (reinterpreted as a call when a bet is owed)
    Check,
    /// Match the table's current bet
    Call,
    /// Increase the table's current bet
    Raise,
    /// Forfeit the hand
    Fold,
}

/// A seat at the table: identity, stack, hole cards, and the per-hand
/// betting flags the state machine reasons about.
#[derive(Debug, Clone)]
pub struct Seat {
    /// Stable seat id used by callers; seating order is positional.
    pub id: usize,
    /// Display name
    pub name: String,
    /// True for the single human-controlled seat
    pub is_human: bool,
    /// Current chip stack
    pub chips: u32,
    /// Hole cards (empty or two)
    pub hole_cards: Vec<Card>,
    pub is_dealer: bool,
    pub is_small_blind: bool,
    pub is_big_blind: bool,
    /// Folded this hand; never acts again until the next hand
    pub is_folded: bool,
    /// Stack fully committed; stays in round bookkeeping but never acts
    pub is_all_in: bool,
    /// False once busted; inactive seats are skipped entirely
    pub is_active: bool,
    /// Chips committed this betting round
    pub current_bet: u32,
    /// Chips committed this hand
    pub total_bet: u32,
    /// Acted since the last raise; cleared at round start and whenever
    /// the table bet rises
    pub has_acted: bool,
}

impl Seat {
    pub fn new(id: usize, name: String, is_human: bool, chips: u32) -> Self {
        Self {
            id,
            name,
            is_human,
            chips,
            hole_cards: Vec::new(),
            is_dealer: false,
            is_small_blind: false,
            is_big_blind: false,
            is_folded: false,
            is_all_in: false,
            is_active: true,
            current_bet: 0,
            total_bet: 0,
            has_acted: false,
        }
    }

    /// Pay up to `amount` into the pot, capped by the stack. Updates both
    /// bet fields and marks the seat all-in when the stack empties.
    /// Returns the chips actually paid.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.total_bet += paid;
        if self.chips == 0 {
            self.is_all_in = true;
        }
        paid
    }

    /// Still contesting the hand (not folded, not busted).
    pub fn is_in_hand(&self) -> bool {
        self.is_active && !self.is_folded
    }

    /// Eligible to act this round.
    pub fn can_act(&self) -> bool {
        self.is_in_hand() && !self.is_all_in
    }
}
