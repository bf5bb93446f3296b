use doudizhu_autoplay::{candidate_plays, choose_bid, choose_play, enumerate_shapes, AutoAction};
use doudizhu_core::{classify, compare, Card, HandKind, Rank, Suit};

fn rank_of(value: u8) -> Rank {
    match value {
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        14 => Rank::Ace,
        15 => Rank::Two,
        16 => Rank::LittleJoker,
        17 => Rank::BigJoker,
        other => panic!("no rank with value {other}"),
    }
}

fn hand(values: &[u8]) -> Vec<Card> {
    const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let rank = rank_of(value);
            if rank.is_joker() {
                Card::new(Suit::None, rank)
            } else {
                Card::new(SUITS[i % 4], rank)
            }
        })
        .collect()
}

#[test]
fn every_enumerated_shape_with_a_kind_is_playable() {
    let holding = hand(&[3, 3, 3, 4, 4, 5, 6, 7, 8, 9, 9, 9, 9, 16, 17]);
    let shapes = enumerate_shapes(&holding);
    assert!(!shapes.is_empty());
    for shape in candidate_plays(&holding, &[]) {
        assert!(classify(&shape).is_playable(), "shape {shape:?}");
    }
}

#[test]
fn enumeration_covers_the_run_shapes() {
    let holding = hand(&[3, 4, 5, 6, 7, 7, 8, 8, 9, 9]);
    let kinds: Vec<HandKind> = enumerate_shapes(&holding)
        .iter()
        .map(|shape| classify(shape))
        .collect();
    assert!(kinds.contains(&HandKind::Straight));
    assert!(kinds.contains(&HandKind::PairSequence));
}

#[test]
fn candidates_against_a_table_all_beat_it() {
    let holding = hand(&[3, 3, 5, 5, 9, 9, 9, 12, 12, 12, 12, 16, 17]);
    let table = hand(&[8, 8]);
    let candidates = candidate_plays(&holding, &table);
    assert!(!candidates.is_empty());
    for candidate in candidates {
        assert!(
            compare(&candidate, &table).unwrap().beats(),
            "candidate {candidate:?}"
        );
    }
}

#[test]
fn chooses_the_cheapest_answer() {
    let holding = hand(&[5, 5, 9, 9, 13, 13]);
    let table = hand(&[4, 4]);
    match choose_play(&holding, &table) {
        AutoAction::Play { cards } => {
            assert_eq!(classify(&cards), HandKind::Pair);
            assert_eq!(cards[0].rank, Rank::Five);
        }
        other => panic!("expected a play, got {other:?}"),
    }
}

#[test]
fn reaches_for_a_bomb_only_when_nothing_else_answers() {
    let holding = hand(&[3, 7, 7, 7, 7]);
    let table = hand(&[15, 15]);
    match choose_play(&holding, &table) {
        AutoAction::Play { cards } => assert_eq!(classify(&cards), HandKind::Bomb),
        other => panic!("expected the bomb, got {other:?}"),
    }
}

#[test]
fn passes_when_nothing_beats_the_table() {
    let holding = hand(&[3, 4, 6]);
    let table = hand(&[14, 14]);
    assert_eq!(choose_play(&holding, &table), AutoAction::Pass);
}

#[test]
fn leads_with_the_lowest_material() {
    let holding = hand(&[6, 10, 10, 14]);
    match choose_play(&holding, &[]) {
        AutoAction::Play { cards } => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].rank, Rank::Six);
        }
        other => panic!("expected a lead, got {other:?}"),
    }
}

#[test]
fn bids_on_power_declines_without() {
    assert!(choose_bid(&hand(&[16, 17, 3, 4, 5])));
    assert!(choose_bid(&hand(&[8, 8, 8, 8, 3])));
    assert!(choose_bid(&hand(&[15, 15, 15, 4, 5])));
    assert!(!choose_bid(&hand(&[3, 4, 5, 6, 8, 9, 10, 12])));
}
