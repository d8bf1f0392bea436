//! Test-only phase builders for domain unit tests.

use crate::domain::cards_parsing::parse_hand;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Hand, Seat, Table};
use crate::domain::tricks::PlayCardsPhase;
use crate::domain::{BidPhaseOne, Card, Contract, Suit};

/// Hands used across the bidding and play tests.
pub const STANDARD_HANDS: [&str; PLAYERS] = [
    "A.S K.S J.S Q.H 9.D",
    "A.C K.C J.C Q.D 9.H",
    "A.H K.H J.H Q.C 9.C",
    "A.D K.D J.D Q.S 9.S",
];

pub fn hands(strs: [&str; PLAYERS]) -> [Hand; PLAYERS] {
    strs.map(|s| parse_hand(s).unwrap())
}

pub fn card(s: &str) -> Card {
    s.parse().unwrap()
}

pub fn table(hands: [Hand; PLAYERS], dealer: Seat, turn: Seat) -> Table {
    Table {
        score: [0, 0],
        hands,
        dealer,
        turn,
        game_seed: 7,
        hand_no: 1,
    }
}

/// Dealer 0, seat 1 to bid, 10.D turned up.
pub fn initial_bid_one() -> BidPhaseOne {
    BidPhaseOne::new(table(hands(STANDARD_HANDS), 0, 1), card("10.D"))
}

/// Play about to start with seat 1 leading and seat 1 as maker.
pub fn play_phase_start(trump: Suit) -> PlayCardsPhase {
    PlayCardsPhase::new(
        table(hands(STANDARD_HANDS), 0, 1),
        Contract::new(trump, 1, false),
    )
}

/// Last trick of a hand at two tricks apiece, one ace per seat.
pub fn round_almost_won(trump: Suit) -> PlayCardsPhase {
    let mut phase = PlayCardsPhase::new(
        table(hands(["A.C", "A.D", "A.H", "A.S"]), 0, 1),
        Contract::new(trump, 1, false),
    );
    phase.trick_score = [2, 2];
    phase
}
