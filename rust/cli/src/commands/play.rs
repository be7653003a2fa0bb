use std::error::Error;
use std::io::{self, BufRead, Write};

use felt_ai::create_policy;
use felt_engine::seat::Action;
use felt_engine::table::TableState;

use crate::TableArgs;

use super::{board_line, describe_result, funded_seats, MAX_ACTIONS_PER_HAND};

pub fn run(args: &TableArgs) -> Result<(), Box<dyn Error>> {
    args.validate()?;

    let policy = create_policy("heuristic");
    let mut table = match args.seed {
        Some(seed) => TableState::with_seed(args.small_blind, args.big_blind, args.chips, args.seats, seed),
        None => TableState::new(args.small_blind, args.big_blind, args.chips, args.seats),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut state = table.start_hand()?;
        let mut actions = 0;

        while state.phase.is_betting() {
            if actions >= MAX_ACTIONS_PER_HAND {
                eprintln!("hand aborted: action limit reached");
                break;
            }
            actions += 1;

            let idx = state.current_player_index;
            let seat = &state.seats[idx];
            let seat_id = seat.id;

            if seat.is_human {
                render(&state);
                let Some((action, raise)) = prompt_action(&mut lines, &state)? else {
                    println!("Goodbye.");
                    return Ok(());
                };
                state = state.apply_action(seat_id, action, raise)?;
            } else {
                let decision = policy.decide(&state, seat_id);
                println!(
                    "  {} {}",
                    state.seats[idx].name,
                    match decision.action {
                        Action::Check => "checks".to_string(),
                        Action::Call => "calls".to_string(),
                        Action::Raise => format!("raises {}", decision.raise_amount.unwrap_or(0)),
                        Action::Fold => "folds".to_string(),
                    }
                );
                state = state.apply_action(seat_id, decision.action, decision.raise_amount)?;
            }
        }

        println!("\nBoard: {}", board_line(&state));
        println!("{}", describe_result(&state));
        for seat in &state.seats {
            println!("  {:<8} {:>6} chips", seat.name, seat.chips);
        }

        if state.seats.iter().any(|s| s.is_human && s.chips == 0) {
            println!("You are out of chips.");
            return Ok(());
        }
        if funded_seats(&state) < 2 {
            println!("Game over.");
            return Ok(());
        }

        print!("\nDeal next hand? [Enter to deal, q to quit] ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if line?.trim().eq_ignore_ascii_case("q") {
                    return Ok(());
                }
            }
            None => return Ok(()),
        }
        table = state.next_hand();
    }
}

fn render(state: &TableState) {
    println!("\n=== {:?} | pot {} | to match {} ===", state.phase, state.pot, state.current_bet);
    println!("Board: {}", board_line(state));
    if let Some(seat) = state.seats.iter().find(|s| s.is_human) {
        let hole: Vec<String> = seat.hole_cards.iter().map(|c| c.to_string()).collect();
        let owed = state.current_bet.saturating_sub(seat.current_bet);
        println!(
            "Your hand: {} | chips {} | to call {}",
            hole.join(" "),
            seat.chips,
            owed
        );
    }
}

/// Read one action from stdin. Returns None when the user quits.
fn prompt_action(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    state: &TableState,
) -> Result<Option<(Action, Option<u32>)>, Box<dyn Error>> {
    loop {
        print!("[check/call/raise <amount>/fold/quit] > ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let mut parts = line.trim().split_whitespace();
        match parts.next() {
            Some("check") | Some("k") => return Ok(Some((Action::Check, None))),
            Some("call") | Some("c") => return Ok(Some((Action::Call, None))),
            Some("fold") | Some("f") => return Ok(Some((Action::Fold, None))),
            Some("raise") | Some("r") => {
                let amount = match parts.next() {
                    Some(raw) => match raw.parse::<u32>() {
                        Ok(v) => Some(v),
                        Err(_) => {
                            println!("raise amount must be a number");
                            continue;
                        }
                    },
                    None => Some(state.big_blind),
                };
                return Ok(Some((Action::Raise, amount)));
            }
            Some("quit") | Some("q") => return Ok(None),
            _ => println!("unrecognized action"),
        }
    }
}
