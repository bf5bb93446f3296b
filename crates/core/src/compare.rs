use crate::{classify, rank_counts, Card, HandKind, Rank};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verdict of pitting two played hands against each other.
/// `Incomparable` is a defined result, not a failure: two valid hands of
/// different non-bomb kinds simply cannot be ranked, and the protocol
/// treats that as "does not beat".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOrder {
    Less,
    Equal,
    Greater,
    Incomparable,
}

impl HandOrder {
    pub fn beats(self) -> bool {
        self == HandOrder::Greater
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("hand does not classify as any playable kind")]
    Invalid,
    #[error("same-kind hands of different shape: {0} vs {1} cards")]
    LengthMismatch(usize, usize),
}

/// Compares two candidate plays. Errors are reserved for precondition
/// violations: either side classifying `Invalid`, or same-kind hands of
/// different run length (the protocol requires shape-compatible
/// challenges before this is called).
pub fn compare(a: &[Card], b: &[Card]) -> Result<HandOrder, CompareError> {
    let kind_a = classify(a);
    let kind_b = classify(b);
    if kind_a == HandKind::Invalid || kind_b == HandKind::Invalid {
        return Err(CompareError::Invalid);
    }
    if kind_a == kind_b {
        return compare_same_kind(a, b, kind_a);
    }
    Ok(match (kind_a, kind_b) {
        (HandKind::Rocket, _) => HandOrder::Greater,
        (_, HandKind::Rocket) => HandOrder::Less,
        (HandKind::Bomb, _) => HandOrder::Greater,
        (_, HandKind::Bomb) => HandOrder::Less,
        _ => HandOrder::Incomparable,
    })
}

fn compare_same_kind(a: &[Card], b: &[Card], kind: HandKind) -> Result<HandOrder, CompareError> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch(a.len(), b.len()));
    }
    if kind == HandKind::Rocket {
        return Ok(HandOrder::Equal);
    }
    let rank_a = primary_rank(a, kind).ok_or(CompareError::Invalid)?;
    let rank_b = primary_rank(b, kind).ok_or(CompareError::Invalid)?;
    Ok(if rank_a > rank_b {
        HandOrder::Greater
    } else if rank_a < rank_b {
        HandOrder::Less
    } else {
        HandOrder::Equal
    })
}

/// The rank that decides a same-kind contest: the quad of a bomb or
/// four-with-two, the triple of triple-based kinds, the lowest unit of a
/// run, the card itself for singles and pairs. `None` for `Invalid` and
/// `Rocket`, which have no single deciding rank.
pub fn primary_rank(cards: &[Card], kind: HandKind) -> Option<Rank> {
    let counts = rank_counts(cards);
    match kind {
        HandKind::Single | HandKind::Pair | HandKind::Triple => {
            cards.first().map(|card| card.rank)
        }
        HandKind::Bomb | HandKind::FourWithTwo => counts
            .iter()
            .find(|(_, &count)| count == 4)
            .map(|(&rank, _)| rank),
        HandKind::TripleWithOne | HandKind::TripleWithTwo => counts
            .iter()
            .find(|(_, &count)| count == 3)
            .map(|(&rank, _)| rank),
        HandKind::Airplane | HandKind::AirplaneWithWings => counts
            .iter()
            .filter(|(_, &count)| count >= 3)
            .map(|(&rank, _)| rank)
            .min(),
        HandKind::Straight | HandKind::PairSequence => {
            cards.iter().map(|card| card.rank).min()
        }
        HandKind::Invalid | HandKind::Rocket => None,
    }
}
