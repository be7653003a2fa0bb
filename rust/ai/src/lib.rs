//! # felt-ai: bot seat policies
//!
//! Decision policies for the bot seats at a [`felt_engine`] table. A
//! policy is a pure function from table state and seat id to a suggested
//! action; the scheduler driving the table consults it for every bot
//! turn and feeds the result to `TableState::apply_action`.
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::{create_policy, Policy};
//! use felt_engine::table::TableState;
//!
//! let policy = create_policy("heuristic");
//! let table = TableState::with_seed(10, 20, 1000, 3, 7)
//!     .start_hand()
//!     .expect("fresh table");
//!
//! let seat_id = table.seats[table.current_player_index].id;
//! let decision = policy.decide(&table, seat_id);
//! println!("bot plays {:?}", decision.action);
//! ```

use felt_engine::seat::Action;
use felt_engine::table::TableState;

pub mod heuristic;

/// A suggested action and, when raising, a suggested raise size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub raise_amount: Option<u32>,
}

impl Decision {
    pub fn of(action: Action) -> Self {
        Self {
            action,
            raise_amount: None,
        }
    }
}

/// Interface for bot decision policies.
pub trait Policy: Send + Sync {
    /// Suggest an action for `seat_id` against a snapshot of the table.
    /// Must be deterministic for a given state so hands can be replayed.
    fn decide(&self, state: &TableState, seat_id: usize) -> Decision;

    /// Name of this policy implementation.
    fn name(&self) -> &str;
}

/// Create a policy by kind.
///
/// # Panics
///
/// Panics on an unknown kind. Currently only `"heuristic"` is supported.
pub fn create_policy(kind: &str) -> Box<dyn Policy> {
    match kind {
        "heuristic" => Box::new(heuristic::HeuristicPolicy::new()),
        _ => panic!("Unknown policy kind: {}", kind),
    }
}
