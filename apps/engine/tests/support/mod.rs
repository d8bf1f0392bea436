#![allow(dead_code)]

//! Fixtures shared by the integration tests: hands from strings and canned games.

use euchre_engine::domain::bidding::BidPhaseOne;
use euchre_engine::domain::state::{Hand, Seat, Table};
use euchre_engine::domain::tricks::PlayCardsPhase;
use euchre_engine::domain::{parse_hand, Contract};
use euchre_engine::{Card, Game, Phase, Suit};

pub const STANDARD_HANDS: [&str; 4] = [
    "A.S K.S J.S Q.H 9.D",
    "A.C K.C J.C Q.D 9.H",
    "A.H K.H J.H Q.C 9.C",
    "A.D K.D J.D Q.S 9.S",
];

pub fn hand_from_str(s: &str) -> Hand {
    parse_hand(s).expect("valid hand text")
}

pub fn card(s: &str) -> Card {
    s.parse().expect("valid card text")
}

fn table(hand_strs: [&str; 4], dealer: Seat, turn: Seat) -> Table {
    Table {
        score: [0, 0],
        hands: hand_strs.map(hand_from_str),
        dealer,
        turn,
        game_seed: 1,
        hand_no: 1,
    }
}

/// Dealer 0, seat 1 to bid, 10.D turned up.
pub fn initial_game_state() -> Game {
    Game::new(Phase::BidOne(BidPhaseOne::new(
        table(STANDARD_HANDS, 0, 1),
        card("10.D"),
    )))
}

pub fn play_phase_start(trump: Suit) -> PlayCardsPhase {
    PlayCardsPhase::new(table(STANDARD_HANDS, 0, 1), Contract::new(trump, 1, false))
}

pub fn play_phase_start_state(trump: Suit) -> Game {
    Game::new(Phase::PlayCards(play_phase_start(trump)))
}

/// Fifth trick at 2-2, one ace per seat, seat 1 (team 1) the maker.
pub fn round_almost_won(trump: Suit) -> PlayCardsPhase {
    let mut phase = PlayCardsPhase::new(
        table(["A.C", "A.D", "A.H", "A.S"], 0, 1),
        Contract::new(trump, 1, false),
    );
    phase.trick_score = [2, 2];
    phase
}

/// Play the given cards, each by the seat holding the turn.
pub fn play_in_turn(game: &mut Game, cards: &[&str]) -> Phase {
    for c in cards {
        let seat = game.state().turn().expect("game still running");
        game.perform_move("play", seat, &[*c])
            .unwrap_or_else(|e| panic!("seat {seat} playing {c}: {e}"));
    }
    game.state().clone()
}
