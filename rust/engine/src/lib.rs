//! # felt-engine: No-Limit Hold'em rules engine
//!
//! A synchronous Texas Hold'em rules engine for one human seat and up to
//! six bot seats at a single table. The engine owns all game truth: card
//! distribution, betting legality, turn order, round completion, phase
//! progression, hand ranking, and pot award. Every operation takes a
//! table state and returns a new one, so callers can keep snapshots for
//! deterministic replay.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`table`] - Table state and the betting state machine
//! - [`seat`] - Seats, stacks, and betting actions
//! - [`hand`] - Poker hand evaluation and tie-break comparison
//! - [`history`] - Hand records and JSONL hand-history logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::seat::Action;
//! use felt_engine::table::{Phase, TableState};
//!
//! // Three seats, blinds 10/20, stacks of 1000, seeded for determinism.
//! let table = TableState::with_seed(10, 20, 1000, 3, 42);
//! let table = table.start_hand().expect("fresh table");
//! assert_eq!(table.phase, Phase::Preflop);
//! assert_eq!(table.pot, 30);
//!
//! // The seat after the big blind acts first.
//! let utg = table.seats[table.current_player_index].id;
//! let table = table.apply_action(utg, Action::Call, None).expect("call");
//! assert_eq!(table.pot, 50);
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_engine::hand::{evaluate_hand, HandCategory};
//!
//! let cards = [
//!     Card { suit: Suit::Spades, rank: Rank::Ace },
//!     Card { suit: Suit::Spades, rank: Rank::King },
//!     Card { suit: Suit::Spades, rank: Rank::Queen },
//!     Card { suit: Suit::Spades, rank: Rank::Jack },
//!     Card { suit: Suit::Spades, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//! assert_eq!(evaluate_hand(&cards).category, HandCategory::RoyalFlush);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod seat;
pub mod table;
