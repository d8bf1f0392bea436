//! Edge-triggered events derived from a before/after pair of phases.

use crate::domain::state::{Seat, Team};
use crate::domain::{Phase, Suit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: every seat passed and the up-card was turned down.
    BiddingRoundTwo,

    /// Edge-triggered: trump was named.
    TrumpMade {
        trump: Suit,
        maker: Seat,
        alone: bool,
    },

    /// Edge-triggered: a trick was completed mid-hand.
    TrickWon { seat: Seat },

    /// Edge-triggered: a hand finished and a new one was dealt.
    HandScored { team: Team, points: u8 },

    /// Edge-triggered: the deal passed to a new dealer.
    NewHandDealt { dealer: Seat, hand_no: u32 },

    /// Edge-triggered: the game reached its terminal phase.
    GameEnded { winning_team: Team },
}

/// Derive domain transitions from the phases around one move.
pub fn derive_transitions(before: &Phase, after: &Phase) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change
    if let Some(seat) = after.turn() {
        if before.turn() != Some(seat) {
            transitions.push(GameTransition::TurnBecame { seat });
        }
    }

    match (before, after) {
        // 2. Everyone passed in round one
        (Phase::BidOne(_), Phase::BidTwo(_)) => {
            transitions.push(GameTransition::BiddingRoundTwo);
        }
        // 3. Trump named
        (Phase::BidOne(_) | Phase::BidTwo(_), Phase::Discard(_) | Phase::PlayCards(_)) => {
            if let Some(contract) = after.contract() {
                transitions.push(GameTransition::TrumpMade {
                    trump: contract.trump,
                    maker: contract.maker,
                    alone: contract.alone(),
                });
            }
        }
        // 4. Trick completed without ending the hand
        (Phase::PlayCards(b), Phase::PlayCards(a)) => {
            if a.trick_score != b.trick_score {
                transitions.push(GameTransition::TrickWon {
                    seat: a.trick.leader(),
                });
            }
        }
        _ => {}
    }

    // 5. Hand scored: a new deal or the end of the game
    if matches!(before, Phase::PlayCards(_))
        && matches!(after, Phase::BidOne(_) | Phase::GameOver(_))
    {
        let (b, a) = (before.score(), after.score());
        if let Some(team) = (0..b.len()).find(|&t| a[t] > b[t]) {
            transitions.push(GameTransition::HandScored {
                team: team as Team,
                points: a[team] - b[team],
            });
        }
    }

    // 6. New deal
    if let (false, Phase::BidOne(p)) = (matches!(before, Phase::BidOne(_)), after) {
        transitions.push(GameTransition::NewHandDealt {
            dealer: p.table.dealer,
            hand_no: p.table.hand_no,
        });
    }

    // 7. Game end
    if let (false, Phase::GameOver(over)) = (before.is_over(), after) {
        transitions.push(GameTransition::GameEnded {
            winning_team: over.winning_team,
        });
    }

    transitions
}
