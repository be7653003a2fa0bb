use felt_engine::cards::{Card, Rank, Suit};
use felt_engine::hand::HandCategory;
use felt_engine::seat::Action;
use felt_engine::table::{Phase, TableState};

fn card(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

/// A board that beats any junk hole cards outright: whoever holds junk
/// plays the board and ties.
fn ace_high_board() -> Vec<Card> {
    vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Nine, Suit::Spades),
    ]
}

#[test]
fn tied_hands_split_the_pot_evenly() {
    let mut t = TableState::with_seed(10, 20, 1000, 2, 31)
        .start_hand()
        .unwrap();
    t = t.apply_action(1, Action::Call, None).unwrap();
    t = t.apply_action(0, Action::Check, None).unwrap();
    assert_eq!(t.phase, Phase::Flop);
    t = t.apply_action(0, Action::Check, None).unwrap();
    t = t.apply_action(1, Action::Check, None).unwrap();
    t = t.apply_action(0, Action::Check, None).unwrap();
    t = t.apply_action(1, Action::Check, None).unwrap();
    assert_eq!(t.phase, Phase::River);

    // Force a tie: both seats play the board.
    t.community_cards = ace_high_board();
    t.seats[0].hole_cards = vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Spades),
    ];
    t.seats[1].hole_cards = vec![
        card(Rank::Two, Suit::Spades),
        card(Rank::Three, Suit::Hearts),
    ];

    t = t.apply_action(0, Action::Check, None).unwrap();
    t = t.apply_action(1, Action::Check, None).unwrap();

    assert_eq!(t.phase, Phase::Showdown);
    assert_eq!(t.winners.len(), 2);
    assert_eq!(t.winning_rank, Some(HandCategory::HighCard));
    assert_eq!(t.pot, 40);
    assert_eq!(t.seats[0].chips, 1000);
    assert_eq!(t.seats[1].chips, 1000);
}

#[test]
fn odd_chip_in_a_split_pot_is_dropped() {
    // Four seats; the small blind folds after posting, leaving a 70-chip
    // pot that three tied winners cannot split evenly.
    let mut t = TableState::with_seed(10, 20, 1000, 4, 32)
        .start_hand()
        .unwrap();
    t = t.apply_action(3, Action::Call, None).unwrap();
    t = t.apply_action(0, Action::Call, None).unwrap();
    t = t.apply_action(1, Action::Fold, None).unwrap();
    t = t.apply_action(2, Action::Check, None).unwrap();
    assert_eq!(t.phase, Phase::Flop);
    assert_eq!(t.pot, 70);

    for _ in 0..2 {
        t = t.apply_action(2, Action::Check, None).unwrap();
        t = t.apply_action(3, Action::Check, None).unwrap();
        t = t.apply_action(0, Action::Check, None).unwrap();
    }
    assert_eq!(t.phase, Phase::River);

    t.community_cards = ace_high_board();
    t.seats[0].hole_cards = vec![
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
    ];
    t.seats[2].hole_cards = vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
    ];
    t.seats[3].hole_cards = vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
    ];

    t = t.apply_action(2, Action::Check, None).unwrap();
    t = t.apply_action(3, Action::Check, None).unwrap();
    t = t.apply_action(0, Action::Check, None).unwrap();

    assert_eq!(t.phase, Phase::Showdown);
    assert_eq!(t.winners.len(), 3);
    // 70 / 3 = 23 each; the leftover chip disappears from play.
    for &i in &[0usize, 2, 3] {
        assert_eq!(t.seats[i].chips, 1000 - 20 + 23);
    }
    assert_eq!(t.seats.iter().map(|s| s.chips).sum::<u32>(), 3999);
}

#[test]
fn best_hand_takes_the_whole_pot() {
    let mut t = TableState::with_seed(10, 20, 1000, 2, 33)
        .start_hand()
        .unwrap();
    t = t.apply_action(1, Action::Call, None).unwrap();
    t = t.apply_action(0, Action::Check, None).unwrap();
    for _ in 0..2 {
        t = t.apply_action(0, Action::Check, None).unwrap();
        t = t.apply_action(1, Action::Check, None).unwrap();
    }
    assert_eq!(t.phase, Phase::River);

    t.community_cards = ace_high_board();
    t.seats[0].hole_cards = vec![
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
    ];
    t.seats[1].hole_cards = vec![
        card(Rank::Two, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ];

    t = t.apply_action(0, Action::Check, None).unwrap();
    t = t.apply_action(1, Action::Check, None).unwrap();

    assert_eq!(t.winners, vec![0]);
    assert_eq!(t.winning_rank, Some(HandCategory::ThreeOfAKind));
    assert_eq!(t.seats[0].chips, 1000 - 20 + 40);
    assert_eq!(t.seats[1].chips, 1000 - 20);
}
