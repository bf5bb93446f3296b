use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Every structure a selection of cards can form. Exactly one tag
/// applies to any multiset; `classify` decides which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Invalid,
    Single,
    Pair,
    Triple,
    TripleWithOne,
    TripleWithTwo,
    Straight,
    PairSequence,
    Airplane,
    AirplaneWithWings,
    FourWithTwo,
    Bomb,
    Rocket,
}

impl HandKind {
    pub const ALL: [HandKind; 13] = [
        HandKind::Invalid,
        HandKind::Single,
        HandKind::Pair,
        HandKind::Triple,
        HandKind::TripleWithOne,
        HandKind::TripleWithTwo,
        HandKind::Straight,
        HandKind::PairSequence,
        HandKind::Airplane,
        HandKind::AirplaneWithWings,
        HandKind::FourWithTwo,
        HandKind::Bomb,
        HandKind::Rocket,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::Invalid => "invalid",
            HandKind::Single => "single",
            HandKind::Pair => "pair",
            HandKind::Triple => "triple",
            HandKind::TripleWithOne => "triple_one",
            HandKind::TripleWithTwo => "triple_two",
            HandKind::Straight => "straight",
            HandKind::PairSequence => "pair_sequence",
            HandKind::Airplane => "airplane",
            HandKind::AirplaneWithWings => "airplane_wings",
            HandKind::FourWithTwo => "four_two",
            HandKind::Bomb => "bomb",
            HandKind::Rocket => "rocket",
        }
    }

    pub fn is_playable(self) -> bool {
        self != HandKind::Invalid
    }
}

/// The shared frequency map every classification rule reads from.
pub fn rank_counts(cards: &[Card]) -> HashMap<Rank, usize> {
    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Total classification. Rules are tried in fixed precedence order and
/// the first match wins; anything unrecognized is `Invalid`. The
/// caller's slice is never reordered.
pub fn classify(cards: &[Card]) -> HandKind {
    let mut ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
    ranks.sort();
    let counts = rank_counts(cards);

    if is_rocket(&ranks) {
        HandKind::Rocket
    } else if is_bomb(&ranks) {
        HandKind::Bomb
    } else if is_airplane_with_wings(&ranks, &counts) {
        HandKind::AirplaneWithWings
    } else if is_airplane(&ranks) {
        HandKind::Airplane
    } else if is_four_with_two(&ranks, &counts) {
        HandKind::FourWithTwo
    } else if is_triple_with_two(&ranks, &counts) {
        HandKind::TripleWithTwo
    } else if is_pair_sequence(&ranks) {
        HandKind::PairSequence
    } else if is_straight(&ranks) {
        HandKind::Straight
    } else if is_triple_with_one(&ranks) {
        HandKind::TripleWithOne
    } else if is_triple(&ranks) {
        HandKind::Triple
    } else if is_pair(&ranks) {
        HandKind::Pair
    } else if ranks.len() == 1 {
        HandKind::Single
    } else {
        HandKind::Invalid
    }
}

fn all_equal(ranks: &[Rank]) -> bool {
    ranks.windows(2).all(|w| w[0] == w[1])
}

fn is_rocket(ranks: &[Rank]) -> bool {
    ranks == [Rank::LittleJoker, Rank::BigJoker]
}

fn is_bomb(ranks: &[Rank]) -> bool {
    ranks.len() == 4 && all_equal(ranks)
}

// Triples plus one attached card each (length % 4 == 0) or one attached
// pair each (length % 5 == 0). A count-4 rank yields a main triple plus
// one leftover single. Attached singles only have to match the triple
// count; attached pairs must additionally land on distinct ranks. The
// % 4 reading wins when both divide.
fn is_airplane_with_wings(ranks: &[Rank], counts: &HashMap<Rank, usize>) -> bool {
    let with_one = ranks.len() % 4 == 0;
    let with_two = ranks.len() % 5 == 0;
    if ranks.len() < 8 || !(with_one || with_two) {
        return false;
    }
    let mut mains = 0usize;
    let mut wing_cards = 0usize;
    let mut wing_ranks: HashSet<Rank> = HashSet::new();
    for (&rank, &count) in counts {
        if count == 4 {
            mains += 1;
            wing_cards += 1;
            wing_ranks.insert(rank);
        } else if count == 3 {
            mains += 1;
        } else {
            wing_cards += count;
            wing_ranks.insert(rank);
        }
    }
    if with_one {
        mains == wing_cards
    } else {
        mains == wing_ranks.len()
    }
}

fn is_airplane(ranks: &[Rank]) -> bool {
    if ranks.len() < 6 || ranks.len() % 3 != 0 {
        return false;
    }
    if !ranks.iter().all(|rank| rank.can_chain()) {
        return false;
    }
    for (i, chunk) in ranks.chunks_exact(3).enumerate() {
        if !all_equal(chunk) {
            return false;
        }
        if i > 0 && chunk[0].value() != ranks[(i - 1) * 3].value() + 1 {
            return false;
        }
    }
    true
}

fn is_four_with_two(ranks: &[Rank], counts: &HashMap<Rank, usize>) -> bool {
    ranks.len() == 6 && counts.values().any(|&count| count == 4)
}

fn is_triple_with_two(ranks: &[Rank], counts: &HashMap<Rank, usize>) -> bool {
    if ranks.len() != 5 {
        return false;
    }
    let has_three = counts.values().any(|&count| count == 3);
    let has_pair = counts.values().any(|&count| count == 2);
    // Both jokers together stand in for the attached pair.
    let has_jokers = counts.get(&Rank::LittleJoker) == Some(&1)
        && counts.get(&Rank::BigJoker) == Some(&1);
    has_three && (has_pair || has_jokers)
}

fn is_pair_sequence(ranks: &[Rank]) -> bool {
    if ranks.len() < 6 || ranks.len() % 2 != 0 {
        return false;
    }
    if !ranks.iter().all(|rank| rank.can_chain()) {
        return false;
    }
    for (i, chunk) in ranks.chunks_exact(2).enumerate() {
        if chunk[0] != chunk[1] {
            return false;
        }
        if i > 0 && chunk[0].value() != ranks[(i - 1) * 2].value() + 1 {
            return false;
        }
    }
    true
}

fn is_straight(ranks: &[Rank]) -> bool {
    if ranks.len() < 5 {
        return false;
    }
    if !ranks.iter().all(|rank| rank.can_chain()) {
        return false;
    }
    ranks
        .windows(2)
        .all(|w| w[1].value() == w[0].value() + 1)
}

fn is_triple_with_one(ranks: &[Rank]) -> bool {
    if ranks.len() != 4 {
        return false;
    }
    (all_equal(&ranks[..3]) && ranks[2] != ranks[3])
        || (all_equal(&ranks[1..]) && ranks[0] != ranks[1])
}

fn is_triple(ranks: &[Rank]) -> bool {
    ranks.len() == 3 && all_equal(ranks)
}

fn is_pair(ranks: &[Rank]) -> bool {
    ranks.len() == 2 && ranks[0] == ranks[1]
}
