use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{compare_hands, evaluate_hand, HandCategory, HandResult};
use crate::seat::{Action, Seat};

/// Minimum number of seats at a table.
pub const MIN_SEATS: usize = 2;
/// Maximum number of seats; 7 seats keep the 52-card deck sufficient
/// (2 * 7 hole cards + 5 board cards).
pub const MAX_SEATS: usize = 7;

const BOT_NAMES: [&str; 6] = ["Alex", "Brian", "Chris", "Daniel", "Eric", "Frank"];

/// The phase of the current hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Between hands; blinds not yet posted
    Setup,
    /// First betting round, hole cards only
    Preflop,
    /// Second betting round, three board cards
    Flop,
    /// Third betting round, four board cards
    Turn,
    /// Last betting round, five board cards
    River,
    /// Hands revealed, winners resolved
    Showdown,
    /// Hand ended early with a single unfolded seat
    GameOver,
}

impl Phase {
    /// A round where betting actions are accepted.
    pub fn is_betting(&self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }
}

/// The whole truth about one table: seats, board, pot, and whose turn it
/// is. Operations take a state by reference and return a new state, so a
/// caller can keep snapshots for replay.
#[derive(Debug, Clone)]
pub struct TableState {
    pub phase: Phase,
    /// Seats in fixed seating order
    pub seats: Vec<Seat>,
    pub community_cards: Vec<Card>,
    pub pot: u32,
    /// The per-round bet every contender must match to stay in
    pub current_bet: u32,
    pub dealer_index: usize,
    /// Whose turn it is (index into `seats`)
    pub current_player_index: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_chips: u32,
    /// Seat ids of the hand's winners; populated at showdown or fold-out
    pub winners: Vec<usize>,
    /// Category of the winning hand, for display
    pub winning_rank: Option<HandCategory>,
    /// Seat index of the last raiser this round, if any
    pub last_raise_index: Option<usize>,
    deck: Deck,
}

impl TableState {
    /// Create a table in the setup phase. Seat 0 is the human seat; the
    /// rest are bots. `seat_count` is clamped to `[MIN_SEATS, MAX_SEATS]`.
    pub fn new(small_blind: u32, big_blind: u32, starting_chips: u32, seat_count: usize) -> Self {
        Self::with_seed(
            small_blind,
            big_blind,
            starting_chips,
            seat_count,
            rand::rng().random(),
        )
    }

    /// Same as [`TableState::new`] but with caller-supplied randomness,
    /// for deterministic replay and testing.
    pub fn with_seed(
        small_blind: u32,
        big_blind: u32,
        starting_chips: u32,
        seat_count: usize,
        seed: u64,
    ) -> Self {
        let seat_count = seat_count.clamp(MIN_SEATS, MAX_SEATS);
        let mut seats = Vec::with_capacity(seat_count);
        seats.push(Seat::new(0, "You".to_string(), true, starting_chips));
        for i in 1..seat_count {
            let name = BOT_NAMES[(i - 1) % BOT_NAMES.len()].to_string();
            seats.push(Seat::new(i, name, false, starting_chips));
        }
        Self {
            phase: Phase::Setup,
            seats,
            community_cards: Vec::new(),
            pot: 0,
            current_bet: 0,
            dealer_index: 0,
            current_player_index: 0,
            small_blind,
            big_blind,
            starting_chips,
            winners: Vec::new(),
            winning_rank: None,
            last_raise_index: None,
            deck: Deck::new_with_seed(seed),
        }
    }

    /// Start a hand: post blinds, deal hole cards, and open preflop
    /// betting with the seat after the big blind.
    ///
    /// Blind seats pay `min(blind, stack)` and go all-in when short; if
    /// posting puts every seat all-in the board runs straight out to
    /// showdown. With fewer than two funded seats there is nothing to
    /// play and the returned state is in `GameOver`.
    pub fn start_hand(&self) -> Result<TableState, GameError> {
        if self.phase != Phase::Setup {
            return Err(GameError::HandInProgress);
        }

        let mut next = self.clone();
        if next.seats.iter().filter(|s| s.is_active).count() < 2 {
            next.phase = Phase::GameOver;
            return Ok(next);
        }

        for seat in &mut next.seats {
            seat.is_dealer = false;
            seat.is_small_blind = false;
            seat.is_big_blind = false;
            seat.is_folded = false;
            seat.is_all_in = false;
            seat.has_acted = false;
            seat.current_bet = 0;
            seat.total_bet = 0;
            seat.hole_cards.clear();
        }
        next.seats[next.dealer_index].is_dealer = true;

        let sb_index = next.next_active_seat(next.dealer_index);
        let bb_index = next.next_active_seat(sb_index);
        next.seats[sb_index].is_small_blind = true;
        next.seats[bb_index].is_big_blind = true;

        next.deck.shuffle();
        next.community_cards.clear();

        // Two passes, one card per active seat per pass.
        for _ in 0..2 {
            for i in 0..next.seats.len() {
                if next.seats[i].is_active {
                    let card = next.deck.deal_card().ok_or(GameError::EmptyDeck)?;
                    next.seats[i].hole_cards.push(card);
                }
            }
        }

        let sb_paid = next.seats[sb_index].pay(self.small_blind);
        let bb_paid = next.seats[bb_index].pay(self.big_blind);
        next.pot = sb_paid + bb_paid;
        next.current_bet = bb_paid;

        next.current_player_index = next.next_active_seat(bb_index);
        next.last_raise_index = None;
        next.winners.clear();
        next.winning_rank = None;
        next.phase = Phase::Preflop;

        // Posting can put every funded seat all-in; run the board straight
        // out instead of opening a betting round nobody can close.
        if !next.seats.iter().any(|s| s.can_act()) {
            while next.phase.is_betting() {
                next.advance_phase()?;
            }
        }
        Ok(next)
    }

    /// Apply one betting action for `seat_id` and return the new state.
    ///
    /// An unknown, folded, or all-in seat is a silent no-op. A check with
    /// a bet owed is reinterpreted as a call; a call (or raise) the stack
    /// cannot cover puts the seat all-in. An all-in that exceeds the
    /// table bet counts as a raise and reopens action for the others.
    ///
    /// After the action the turn advances past folded and all-in seats,
    /// and a completed round moves the hand to the next street, straight
    /// through to showdown once at most one contender can still act.
    pub fn apply_action(
        &self,
        seat_id: usize,
        action: Action,
        raise_amount: Option<u32>,
    ) -> Result<TableState, GameError> {
        let mut next = self.clone();
        if !next.phase.is_betting() {
            return Ok(next);
        }
        let Some(idx) = next.seats.iter().position(|s| s.id == seat_id) else {
            return Ok(next);
        };
        if next.seats[idx].is_folded || next.seats[idx].is_all_in {
            return Ok(next);
        }

        let call_amount = next.current_bet.saturating_sub(next.seats[idx].current_bet);

        match action {
            Action::Fold => {
                let seat = &mut next.seats[idx];
                seat.is_folded = true;
                seat.is_active = false;
            }
            Action::Check | Action::Call => {
                // A check that owes chips pays the call (or the stack).
                let paid = next.seats[idx].pay(call_amount);
                next.pot += paid;
            }
            Action::Raise => {
                // A missing or zero raise is a minimum raise of one big blind.
                let raise = raise_amount.filter(|&r| r > 0).unwrap_or(next.big_blind);
                let paid = next.seats[idx].pay(call_amount.saturating_add(raise));
                next.pot += paid;
                if next.seats[idx].current_bet > next.current_bet {
                    next.current_bet = next.seats[idx].current_bet;
                    next.last_raise_index = Some(idx);
                    for i in 0..next.seats.len() {
                        if i != idx {
                            next.seats[i].has_acted = false;
                        }
                    }
                }
            }
        }
        next.seats[idx].has_acted = true;

        next.current_player_index = next.next_active_seat(next.current_player_index);

        // Everyone else folded: the hand ends here, no more streets.
        if next.seats.iter().filter(|s| s.is_in_hand()).count() <= 1 {
            next.resolve_winners();
            next.phase = Phase::GameOver;
            return Ok(next);
        }

        while next.phase.is_betting() && next.is_round_complete() {
            next.advance_phase()?;
        }
        Ok(next)
    }

    /// Index of the next seat after `from` that can still act (unfolded,
    /// active, not all-in). Falls back to the lap's end when nobody can.
    pub fn next_active_seat(&self, from: usize) -> usize {
        let n = self.seats.len();
        let mut idx = (from + 1) % n;
        for _ in 0..n {
            if self.seats[idx].can_act() {
                return idx;
            }
            idx = (idx + 1) % n;
        }
        idx
    }

    /// Prepare the next hand: rotate the dealer one seat, keep stacks,
    /// retire busted seats, and reset all per-hand state.
    pub fn next_hand(&self) -> TableState {
        let mut next = self.clone();
        next.phase = Phase::Setup;
        next.community_cards.clear();
        next.pot = 0;
        next.current_bet = 0;
        next.winners.clear();
        next.winning_rank = None;
        next.last_raise_index = None;
        next.dealer_index = (self.dealer_index + 1) % self.seats.len();
        next.current_player_index = 0;
        for seat in &mut next.seats {
            seat.hole_cards.clear();
            seat.current_bet = 0;
            seat.total_bet = 0;
            seat.is_folded = false;
            seat.is_all_in = false;
            seat.has_acted = false;
            seat.is_dealer = false;
            seat.is_small_blind = false;
            seat.is_big_blind = false;
            seat.is_active = seat.chips > 0;
        }
        next
    }

    /// A betting round is complete when at most one unfolded seat
    /// remains, or at most one contender is not all-in, or every
    /// contender has matched the table bet and acted since the last
    /// raise. A round nobody has acted in is never complete.
    fn is_round_complete(&self) -> bool {
        if self.seats.iter().filter(|s| s.is_in_hand()).count() <= 1 {
            return true;
        }
        let contenders: Vec<&Seat> = self.seats.iter().filter(|s| s.can_act()).collect();
        // A seat that still owes chips keeps the round open, even when it
        // is the last one able to act (facing an all-in).
        if contenders.iter().any(|s| s.current_bet != self.current_bet) {
            return false;
        }
        if contenders.len() <= 1 {
            return true;
        }
        contenders.iter().all(|s| s.has_acted)
    }

    /// Move to the next street: reveal board cards, reset the round, and
    /// hand the turn to the seat after the small blind. Entering showdown
    /// resolves winners instead of dealing.
    fn advance_phase(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Preflop => {
                self.phase = Phase::Flop;
                self.deal_community(3)?;
                self.begin_round();
            }
            Phase::Flop => {
                self.phase = Phase::Turn;
                self.deal_community(1)?;
                self.begin_round();
            }
            Phase::Turn => {
                self.phase = Phase::River;
                self.deal_community(1)?;
                self.begin_round();
            }
            Phase::River => {
                self.phase = Phase::Showdown;
                self.resolve_winners();
            }
            _ => {}
        }
        Ok(())
    }

    fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        for _ in 0..count {
            let card = self.deck.deal_card().ok_or(GameError::EmptyDeck)?;
            self.community_cards.push(card);
        }
        Ok(())
    }

    fn begin_round(&mut self) {
        for seat in &mut self.seats {
            seat.current_bet = 0;
            seat.has_acted = false;
        }
        self.current_bet = 0;
        self.last_raise_index = None;
        let sb_index = self
            .seats
            .iter()
            .position(|s| s.is_small_blind)
            .unwrap_or(self.dealer_index);
        self.current_player_index = self.next_active_seat(sb_index);
    }

    /// Rank the unfolded seats, collect the winner set, and split the pot
    /// by integer division. A lone unfolded seat wins uncontested; its
    /// rank is still computed for display (sentinel below five cards).
    /// The remainder of a non-divisible pot is dropped, and the whole pot
    /// goes to the winners regardless of all-in contribution levels.
    fn resolve_winners(&mut self) {
        let in_hand: Vec<usize> = (0..self.seats.len())
            .filter(|&i| self.seats[i].is_in_hand())
            .collect();

        let results: Vec<(usize, HandResult)> = in_hand
            .iter()
            .map(|&i| {
                let mut cards = self.seats[i].hole_cards.clone();
                cards.extend_from_slice(&self.community_cards);
                (i, evaluate_hand(&cards))
            })
            .collect();

        let Some(best) = results
            .iter()
            .map(|(_, r)| *r)
            .max_by(|a, b| compare_hands(a, b))
        else {
            return;
        };
        self.winning_rank = Some(best.category);

        let winner_indices: Vec<usize> = results
            .iter()
            .filter(|(_, r)| compare_hands(r, &best) == std::cmp::Ordering::Equal)
            .map(|(i, _)| *i)
            .collect();

        let share = self.pot / winner_indices.len() as u32;
        for &i in &winner_indices {
            self.seats[i].chips += share;
        }
        self.winners = winner_indices.iter().map(|&i| self.seats[i].id).collect();
    }
}
