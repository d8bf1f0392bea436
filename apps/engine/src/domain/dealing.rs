//! The 24-card euchre deck and seeded dealing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::Hand;
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

pub const DECK_SIZE: usize = 24;

/// Every card in the deck, suit-major in canonical order.
pub const CANONICAL_CARDS: [Card; DECK_SIZE] = canonical_cards();

const fn canonical_cards() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Nine, Suit::Clubs); DECK_SIZE];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// A draw pile. Cards are drawn from the end of `remaining`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    remaining: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full, unshuffled deck.
    pub fn new() -> Self {
        Self {
            remaining: CANONICAL_CARDS.to_vec(),
        }
    }

    /// A full deck shuffled deterministically from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle(&mut rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.remaining.pop()
    }

    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Four hands plus the turned-up card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Hand; PLAYERS],
    pub up_card: Card,
}

/// Deal five cards to each seat in turn, then turn up the next card.
pub fn deal(deck: &mut Deck) -> Result<Deal, DomainError> {
    let mut hands: [Hand; PLAYERS] = Default::default();
    for hand in hands.iter_mut() {
        for _ in 0..HAND_SIZE {
            let card = deck
                .draw()
                .ok_or_else(|| DomainError::invariant("deck exhausted while dealing"))?;
            hand.push(card);
        }
    }
    let up_card = deck
        .draw()
        .ok_or_else(|| DomainError::invariant("deck exhausted before up-card"))?;
    Ok(Deal { hands, up_card })
}

/// Shuffle a fresh deck from `seed` and deal it.
pub fn deal_with_seed(seed: u64) -> Result<Deal, DomainError> {
    deal(&mut Deck::shuffled(seed))
}
