use std::error::Error;

use felt_ai::create_policy;
use felt_engine::history::{ActionRecord, HandLogger, HandRecord};
use felt_engine::table::TableState;

use crate::SimArgs;

use super::{describe_result, funded_seats, MAX_ACTIONS_PER_HAND};

pub fn run(args: &SimArgs) -> Result<(), Box<dyn Error>> {
    args.table.validate()?;

    let policy = create_policy("heuristic");
    let t = &args.table;
    let mut table = match t.seed {
        Some(seed) => TableState::with_seed(t.small_blind, t.big_blind, t.chips, t.seats, seed),
        None => TableState::new(t.small_blind, t.big_blind, t.chips, t.seats),
    };
    let mut logger = match &args.log {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    let mut hands_played = 0u64;
    for hand_no in 1..=args.hands {
        let mut state = table.start_hand()?;
        let mut actions = Vec::new();

        let mut budget = MAX_ACTIONS_PER_HAND;
        while state.phase.is_betting() {
            if budget == 0 {
                eprintln!("hand {} aborted: action limit reached", hand_no);
                break;
            }
            budget -= 1;

            let seat_id = state.seats[state.current_player_index].id;
            let decision = policy.decide(&state, seat_id);
            actions.push(ActionRecord {
                seat_id,
                phase: state.phase,
                action: decision.action,
                amount: decision.raise_amount,
            });
            state = state.apply_action(seat_id, decision.action, decision.raise_amount)?;
        }
        hands_played = hand_no;

        if let Some(logger) = logger.as_mut() {
            logger.write(&HandRecord {
                hand_no,
                seed: t.seed,
                actions,
                board: state.community_cards.clone(),
                pot: state.pot,
                winners: state.winners.clone(),
                winning_rank: state.winning_rank,
                ts: None,
            })?;
        }

        println!("hand {:>4}: {}", hand_no, describe_result(&state));

        if funded_seats(&state) < 2 {
            println!("table down to one stack after {} hands", hand_no);
            table = state;
            break;
        }
        table = state.next_hand();
    }

    println!("\n{} hands played; final stacks:", hands_played);
    for seat in &table.seats {
        println!("  {:<8} {:>6} chips", seat.name, seat.chips);
    }
    Ok(())
}
