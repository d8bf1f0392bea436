//! Trump-relative card logic: effective suits, ranking, and follow-suit checks.
//!
//! `relative_rank` is the only ordering over cards. Trick winners and
//! must-follow checks are both derived from it.

use super::cards_types::{Card, Rank, Suit};

/// Rank value of the trump-suit jack.
pub const RIGHT_BOWER: u8 = 21;
/// Rank value of the same-color jack.
pub const LEFT_BOWER: u8 = 20;

/// Suit tiers used as the first element of `relative_rank`.
pub const TIER_TRUMP: u8 = 2;
pub const TIER_LED: u8 = 1;
pub const TIER_OFF: u8 = 0;

/// Suit a card belongs to once trump is known.
///
/// The jack of the suit sharing trump's color counts as trump.
pub fn relative_suit(card: Card, trump: Suit) -> Suit {
    if card.rank == Rank::Jack && card.color() == trump.color() {
        trump
    } else {
        card.suit
    }
}

pub fn is_right_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit == trump
}

pub fn is_left_bower(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Jack && card.suit != trump && card.color() == trump.color()
}

/// Strength of a card as `(suit_tier, rank_value)`; compare lexicographically.
pub fn relative_rank(card: Card, trump: Suit, led: Option<Suit>) -> (u8, u8) {
    let suit = relative_suit(card, trump);
    if suit == trump {
        let rank_value = if is_right_bower(card, trump) {
            RIGHT_BOWER
        } else if is_left_bower(card, trump) {
            LEFT_BOWER
        } else {
            card.rank.ordinal()
        };
        return (TIER_TRUMP, rank_value);
    }
    let tier = if Some(suit) == led { TIER_LED } else { TIER_OFF };
    (tier, card.rank.ordinal())
}

/// Whether `a` beats `b` in a trick led with `led`.
pub fn card_beats(a: Card, b: Card, led: Suit, trump: Suit) -> bool {
    relative_rank(a, trump, Some(led)) > relative_rank(b, trump, Some(led))
}

/// Whether `card` follows `led`; anything follows an empty trick.
pub fn follows_suit(card: Card, trump: Suit, led: Option<Suit>) -> bool {
    match led {
        Some(led) => relative_suit(card, trump) == led,
        None => true,
    }
}

/// Whether the hand holds any card whose relative suit is `suit`.
pub fn hand_has_suit(hand: &[Card], suit: Suit, trump: Suit) -> bool {
    hand.iter().any(|&c| relative_suit(c, trump) == suit)
}
