use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories in ascending order of strength. The explicit ordinals
/// make the total order machine-checkable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

/// The value of a best five-card hand: a category plus the kicker ranks
/// used to break ties within the category, highest first. Unused kicker
/// slots are zero so array comparison is the tie-break order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandResult {
    pub category: HandCategory,
    pub kickers: [u8; 5],
}

impl HandResult {
    /// Sentinel below every real hand, returned for fewer than 5 cards.
    fn lowest() -> Self {
        Self {
            category: HandCategory::HighCard,
            kickers: [0; 5],
        }
    }
}

/// Find the best five-card hand out of 5 to 7 cards by ranking every
/// 5-card subset (C(7,5) = 21 in the worst case). Returns the sentinel
/// lowest result when given fewer than 5 cards.
pub fn evaluate_hand(cards: &[Card]) -> HandResult {
    let n = cards.len();
    if n < 5 {
        return HandResult::lowest();
    }

    let mut best = HandResult::lowest();
    let mut found = false;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let result = rank_five_cards(&five);
                        if !found || compare_hands(&result, &best) == Ordering::Greater {
                            best = result;
                            found = true;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Classify exactly five cards into a category with its kicker list.
pub fn rank_five_cards(cards: &[Card; 5]) -> HandResult {
    let mut rank_counts = [0u8; 15]; // indices 2..=14 used
    for &c in cards.iter() {
        rank_counts[c.rank as usize] += 1;
    }

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_straight = detect_straight(&rank_counts);

    // All five ranks, highest first, with multiplicity.
    let mut ranks_desc: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
    ranks_desc.sort_unstable_by(|a, b| b.cmp(a));

    if is_flush && is_straight {
        let has_ace = rank_counts[Rank::Ace as usize] > 0;
        let has_king = rank_counts[Rank::King as usize] > 0;
        if has_ace && has_king {
            return HandResult {
                category: HandCategory::RoyalFlush,
                kickers: [0; 5],
            };
        }
        return HandResult {
            category: HandCategory::StraightFlush,
            kickers: [ranks_desc[0], 0, 0, 0, 0],
        };
    }

    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return HandResult {
            category: HandCategory::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        };
    }

    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return HandResult {
            category: HandCategory::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        };
    }

    if is_flush {
        let mut k = [0u8; 5];
        k.copy_from_slice(&ranks_desc);
        return HandResult {
            category: HandCategory::Flush,
            kickers: k,
        };
    }

    if is_straight {
        return HandResult {
            category: HandCategory::Straight,
            kickers: [ranks_desc[0], 0, 0, 0, 0],
        };
    }

    let (trips, pairs, singles) = classify_multiples(&rank_counts);

    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        for (slot, &r) in k[1..3].iter_mut().zip(singles.iter()) {
            *slot = r;
        }
        return HandResult {
            category: HandCategory::ThreeOfAKind,
            kickers: k,
        };
    }

    if pairs.len() >= 2 {
        let mut k = [pairs[0], pairs[1], 0, 0, 0];
        if let Some(&r) = singles.first() {
            k[2] = r;
        }
        return HandResult {
            category: HandCategory::TwoPair,
            kickers: k,
        };
    }

    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (slot, &r) in k[1..4].iter_mut().zip(singles.iter()) {
            *slot = r;
        }
        return HandResult {
            category: HandCategory::OnePair,
            kickers: k,
        };
    }

    let mut k = [0u8; 5];
    k.copy_from_slice(&ranks_desc);
    HandResult {
        category: HandCategory::HighCard,
        kickers: k,
    }
}

/// Order two hand results: category first, then kickers element-wise.
pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Five distinct consecutive ranks, or the wheel (A-2-3-4-5).
fn detect_straight(rank_counts: &[u8; 15]) -> bool {
    for low in 2..=10usize {
        if (low..low + 5).all(|r| rank_counts[r] == 1) {
            return true;
        }
    }
    // Ace counts low in the wheel
    rank_counts[14] == 1 && (2..=5).all(|r| rank_counts[r] == 1)
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let trip = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 3)?;
    let pair = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 2)?;
    Some((trip, pair))
}

/// Split ranks by multiplicity, each list highest first.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = Vec::new();
    let mut pairs = Vec::new();
    let mut singles = Vec::new();
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
