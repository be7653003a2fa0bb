pub mod play;
pub mod sim;

use felt_engine::table::{Phase, TableState};

/// Safety valve against a stuck hand; generous compared to the
/// worst-case number of legal actions at a 7-seat table.
pub(crate) const MAX_ACTIONS_PER_HAND: usize = 500;

pub(crate) fn describe_result(state: &TableState) -> String {
    let names: Vec<&str> = state
        .winners
        .iter()
        .filter_map(|id| state.seats.iter().find(|s| s.id == *id))
        .map(|s| s.name.as_str())
        .collect();
    let rank = state
        .winning_rank
        .map(|r| format!(" with {:?}", r))
        .unwrap_or_default();
    match state.phase {
        Phase::GameOver => format!("{} takes the pot of {} uncontested", names.join(", "), state.pot),
        _ => format!("{} wins {}{}", names.join(", "), state.pot, rank),
    }
}

pub(crate) fn board_line(state: &TableState) -> String {
    if state.community_cards.is_empty() {
        "(no board)".to_string()
    } else {
        state
            .community_cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Seats still able to buy into the next hand.
pub(crate) fn funded_seats(state: &TableState) -> usize {
    state.seats.iter().filter(|s| s.chips > 0).count()
}
