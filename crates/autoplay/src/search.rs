use crate::{AutoAction, AutoplayError};
use doudizhu_core::{
    classify, compare, primary_rank, Card, EventBus, HandKind, Phase, Rank, Round,
};

/// Cards grouped per rank, ascending. The unit every shape builder
/// draws from.
fn rank_groups(hand: &[Card]) -> Vec<(Rank, Vec<Card>)> {
    let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
    let mut sorted = hand.to_vec();
    sorted.sort_by_key(|card| card.rank.value());
    for card in sorted {
        match groups.last_mut() {
            Some((rank, cards)) if *rank == card.rank => cards.push(card),
            _ => groups.push((card.rank, vec![card])),
        }
    }
    groups
}

/// All consecutive-rank windows of at least `min_len` among chainable
/// ranks that satisfy `eligible`.
fn chain_windows(
    groups: &[(Rank, Vec<Card>)],
    min_len: usize,
    eligible: impl Fn(usize) -> bool,
) -> Vec<Vec<Rank>> {
    let ranks: Vec<Rank> = groups
        .iter()
        .filter(|(rank, cards)| rank.can_chain() && eligible(cards.len()))
        .map(|(rank, _)| *rank)
        .collect();
    let mut windows = Vec::new();
    let mut segment: Vec<Rank> = Vec::new();
    for &rank in ranks.iter().chain(std::iter::once(&Rank::BigJoker)) {
        let connects = segment
            .last()
            .map(|prev| rank.value() == prev.value() + 1)
            .unwrap_or(false);
        if !connects {
            for start in 0..segment.len() {
                for end in (start + min_len)..=segment.len() {
                    windows.push(segment[start..end].to_vec());
                }
            }
            segment.clear();
        }
        segment.push(rank);
    }
    windows
}

fn take(groups: &[(Rank, Vec<Card>)], rank: Rank, count: usize) -> Vec<Card> {
    groups
        .iter()
        .find(|(r, _)| *r == rank)
        .map(|(_, cards)| cards[..count].to_vec())
        .unwrap_or_default()
}

/// Every candidate shape the hand can form: singles, pairs, triples and
/// their attachments, runs, four-with-two, bombs, rocket. One attachment
/// choice per shape (the smallest spare material) keeps the search
/// baseline-sized.
pub fn enumerate_shapes(hand: &[Card]) -> Vec<Vec<Card>> {
    let groups = rank_groups(hand);
    let mut shapes: Vec<Vec<Card>> = Vec::new();

    for (rank, cards) in &groups {
        shapes.push(vec![cards[0]]);
        if cards.len() >= 2 {
            shapes.push(cards[..2].to_vec());
        }
        if cards.len() >= 3 {
            let triple = cards[..3].to_vec();
            shapes.push(triple.clone());
            if let Some(single) = spare_singles(&groups, &[*rank], 1).first() {
                let mut with_one = triple.clone();
                with_one.push(*single);
                shapes.push(with_one);
            }
            if let Some(pair) = spare_pairs(&groups, &[*rank], 1).first() {
                let mut with_two = triple.clone();
                with_two.extend_from_slice(pair);
                shapes.push(with_two);
            }
        }
        if cards.len() == 4 {
            shapes.push(cards.clone());
            let spares = spare_singles(&groups, &[*rank], 2);
            if spares.len() == 2 {
                let mut four_two = cards.clone();
                four_two.extend_from_slice(&spares);
                shapes.push(four_two);
            }
        }
    }

    for window in chain_windows(&groups, 5, |count| count >= 1) {
        shapes.push(
            window
                .iter()
                .flat_map(|&rank| take(&groups, rank, 1))
                .collect(),
        );
    }
    for window in chain_windows(&groups, 3, |count| count >= 2) {
        shapes.push(
            window
                .iter()
                .flat_map(|&rank| take(&groups, rank, 2))
                .collect(),
        );
    }
    for window in chain_windows(&groups, 2, |count| count >= 3) {
        let run: Vec<Card> = window
            .iter()
            .flat_map(|&rank| take(&groups, rank, 3))
            .collect();
        shapes.push(run.clone());
        let singles = spare_singles(&groups, &window, window.len());
        if singles.len() == window.len() {
            let mut winged = run.clone();
            winged.extend_from_slice(&singles);
            shapes.push(winged);
        }
        let pairs = spare_pairs(&groups, &window, window.len());
        if pairs.len() == window.len() {
            let mut winged = run.clone();
            for pair in pairs {
                winged.extend_from_slice(&pair);
            }
            shapes.push(winged);
        }
    }

    let rocket: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|card| card.rank.is_joker())
        .collect();
    if rocket.len() == 2 {
        shapes.push(rocket);
    }

    shapes
}

/// Up to `want` lowest cards drawn from ranks outside `used`, one per
/// rank.
fn spare_singles(groups: &[(Rank, Vec<Card>)], used: &[Rank], want: usize) -> Vec<Card> {
    groups
        .iter()
        .filter(|(rank, _)| !used.contains(rank))
        .map(|(_, cards)| cards[0])
        .take(want)
        .collect()
}

/// Up to `want` lowest well-formed pairs from ranks outside `used`.
fn spare_pairs(groups: &[(Rank, Vec<Card>)], used: &[Rank], want: usize) -> Vec<[Card; 2]> {
    groups
        .iter()
        .filter(|(rank, cards)| !used.contains(rank) && cards.len() >= 2)
        .map(|(_, cards)| [cards[0], cards[1]])
        .take(want)
        .collect()
}

/// Shapes that are legal answers to the table: everything when leading,
/// otherwise only hands the comparator ranks strictly above it.
pub fn candidate_plays(hand: &[Card], table: &[Card]) -> Vec<Vec<Card>> {
    let mut candidates: Vec<Vec<Card>> = enumerate_shapes(hand)
        .into_iter()
        .filter(|shape| classify(shape).is_playable())
        .collect();
    if !table.is_empty() {
        candidates.retain(|shape| {
            compare(shape, table)
                .map(|order| order.beats())
                .unwrap_or(false)
        });
    }
    candidates
}

fn power_class(kind: HandKind) -> u8 {
    match kind {
        HandKind::Rocket => 2,
        HandKind::Bomb => 1,
        _ => 0,
    }
}

/// Lowest-wins policy: cheapest kind class first, then lowest primary
/// rank, then fewest cards. Passes when nothing beats the table.
pub fn choose_play(hand: &[Card], table: &[Card]) -> AutoAction {
    let candidates = candidate_plays(hand, table);
    let best = candidates.into_iter().min_by_key(|shape| {
        let kind = classify(shape);
        let primary = primary_rank(shape, kind).map(Rank::value).unwrap_or(0);
        (power_class(kind), primary, shape.len())
    });
    match best {
        Some(cards) => AutoAction::Play { cards },
        None => AutoAction::Pass,
    }
}

/// Calls the landlord on raw power: a bomb, the rocket, or a fistful of
/// top ranks.
pub fn choose_bid(hand: &[Card]) -> bool {
    let groups = rank_groups(hand);
    let has_bomb = groups.iter().any(|(_, cards)| cards.len() == 4);
    let jokers = hand.iter().filter(|card| card.rank.is_joker()).count();
    let top_ranks = hand
        .iter()
        .filter(|card| card.rank.value() >= Rank::Two.value())
        .count();
    has_bomb || jokers == 2 || top_ranks >= 3
}

/// Drives the seat currently at bat through one decision, recording it.
#[derive(Debug, Default)]
pub struct Pilot {
    pub trace: crate::Trace,
}

impl Pilot {
    pub fn act(
        &mut self,
        round: &mut Round,
        events: &mut EventBus,
    ) -> Result<AutoAction, AutoplayError> {
        let phase = round.phase();
        let seat = round.context().active.ok_or(AutoplayError::NotAtBat)?;
        let action = match phase {
            Phase::Bidding => {
                let call = choose_bid(round.context().player(seat).hand());
                round.submit_bid(seat, call, events)?;
                AutoAction::Bid { call }
            }
            Phase::PlayerTurn => {
                let hand = round.context().player(seat).hand().to_vec();
                let table = round.context().table.clone();
                match choose_play(&hand, &table) {
                    AutoAction::Play { cards } => {
                        round.submit_play(seat, &cards, events)?;
                        AutoAction::Play { cards }
                    }
                    _ => {
                        round.submit_pass(seat, events)?;
                        AutoAction::Pass
                    }
                }
            }
            other => {
                return Err(AutoplayError::Round(format!(
                    "no decision to make in phase {other:?}"
                )))
            }
        };
        self.trace.record(phase, seat, &action);
        Ok(action)
    }
}
