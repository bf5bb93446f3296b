use doudizhu_core::{Card, DealError, Deck, Rank, RngState, BOTTOM_SIZE, DECK_SIZE, HAND_SIZE};
use std::collections::HashSet;

#[test]
fn standard54_is_the_full_identity_set() {
    let deck = Deck::standard54();
    assert_eq!(deck.cards.len(), DECK_SIZE);
    let distinct: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    let jokers = deck
        .cards
        .iter()
        .filter(|card| card.rank.is_joker())
        .count();
    assert_eq!(jokers, 2);
}

#[test]
fn shuffle_is_reproducible_per_seed() {
    let mut a = Deck::standard54();
    let mut b = Deck::standard54();
    a.shuffle(&mut RngState::from_seed(7));
    b.shuffle(&mut RngState::from_seed(7));
    assert_eq!(a.cards, b.cards);

    let mut c = Deck::standard54();
    c.shuffle(&mut RngState::from_seed(8));
    assert_ne!(a.cards, c.cards);
}

#[test]
fn shuffle_keeps_every_card() {
    let mut deck = Deck::standard54();
    deck.shuffle(&mut RngState::from_seed(42));
    let distinct: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
}

#[test]
fn deal_partitions_without_loss_for_any_seed() {
    for seed in [0, 1, 2, 99, 0xDEAD_BEEF] {
        let mut deck = Deck::standard54();
        deck.shuffle(&mut RngState::from_seed(seed));
        let dealt = deck.deal().unwrap();
        let mut union: Vec<Card> = Vec::new();
        for hand in &dealt.hands {
            assert_eq!(hand.len(), HAND_SIZE, "seed {seed}");
            union.extend_from_slice(hand);
        }
        assert_eq!(dealt.bottom.len(), BOTTOM_SIZE, "seed {seed}");
        union.extend_from_slice(&dealt.bottom);
        let distinct: HashSet<Card> = union.iter().copied().collect();
        assert_eq!(union.len(), DECK_SIZE);
        assert_eq!(distinct.len(), DECK_SIZE, "seed {seed}");
    }
}

#[test]
fn dealt_hands_come_back_rank_sorted() {
    let mut deck = Deck::standard54();
    deck.shuffle(&mut RngState::from_seed(3));
    let dealt = deck.deal().unwrap();
    for hand in &dealt.hands {
        assert!(hand
            .windows(2)
            .all(|w| w[0].rank.value() <= w[1].rank.value()));
    }
}

#[test]
fn deal_requires_exactly_54_cards() {
    let mut deck = Deck::standard54();
    deck.cards.pop();
    assert_eq!(deck.deal().unwrap_err(), DealError::WrongDeckSize(53));
}

#[test]
fn joker_ordering_tops_the_numeric_ranks() {
    assert!(Rank::LittleJoker < Rank::BigJoker);
    assert!(Rank::Two < Rank::LittleJoker);
    assert!(Rank::Ace < Rank::Two);
    assert!(Rank::Three < Rank::Ace);
}
