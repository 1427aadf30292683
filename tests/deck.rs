//! Deck construction, shuffling, and draw tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Card, DECK_SIZE, Deck, DeckError, EmptyDeckError, Rank, Suit};

#[test]
fn new_deck_has_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.remaining(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn new_deck_order_is_canonical() {
    let deck = Deck::new();
    assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Clubs, Rank::Ace));
    assert_eq!(deck, Deck::new());
}

#[test]
fn same_seed_same_order() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(1234));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(1234));
    assert_eq!(first, second);

    let mut other = Deck::new();
    other.shuffle(&mut ChaCha8Rng::seed_from_u64(4321));
    assert_ne!(first, other);
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(9));

    let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
    let canonical: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(shuffled, canonical);
}

#[test]
fn draw_removes_the_top_card() {
    let mut deck = Deck::new();
    let top = *deck.cards().last().unwrap();

    let card = deck.draw().unwrap();
    assert_eq!(card, top);
    assert_eq!(deck.remaining(), DECK_SIZE - 1);
    assert!(!deck.contains(&card));
}

#[test]
fn draw_on_empty_deck_fails_without_change() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        deck.draw().unwrap();
    }
    assert!(deck.is_empty());

    assert_eq!(deck.draw(), Err(EmptyDeckError));
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn stacked_deck_draws_top_cards_first() {
    let top = [
        Card::new(Suit::Hearts, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::King),
        Card::new(Suit::Spades, Rank::Nine),
    ];
    let mut deck = Deck::stacked(&top).unwrap();
    assert_eq!(deck.remaining(), DECK_SIZE);

    for card in top {
        assert_eq!(deck.draw(), Ok(card));
    }
    // Unlisted cards follow in canonical draw order.
    assert_eq!(deck.draw(), Ok(Card::new(Suit::Diamonds, Rank::Queen)));

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE - 4);
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let card = Card::new(Suit::Clubs, Rank::Seven);
    assert_eq!(
        Deck::stacked(&[card, Card::new(Suit::Clubs, Rank::Two), card]),
        Err(DeckError::DuplicateCard(card))
    );
}

#[test]
fn card_display_and_color() {
    assert_eq!(Card::new(Suit::Hearts, Rank::Ten).to_string(), "10♥");
    assert_eq!(Card::new(Suit::Spades, Rank::Ace).to_string(), "A♠");
    assert!(Suit::Diamonds.is_red());
    assert!(!Suit::Clubs.is_red());
}
