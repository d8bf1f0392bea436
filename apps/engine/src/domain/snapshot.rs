//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots carry every hand; redacting them per viewer is left to whoever
//! publishes the state.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameScore, Hand, Seat, Table, Team, TrickScore};
use crate::domain::tricks::{legal_plays, PlayCardsPhase, Trick};
use crate::domain::{Card, Contract, Phase, Suit};

/// Top-level snapshot: running score plus phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: GameScore,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    #[serde(rename = "bid1")]
    BidOne(BiddingSnapshot),
    #[serde(rename = "bid2")]
    BidTwo(BiddingSnapshot),
    #[serde(rename = "discard")]
    Discard(DiscardSnapshot),
    #[serde(rename = "play")]
    PlayCards(TrickSnapshot),
    #[serde(rename = "gameover")]
    GameOver(GameOverSnapshot),
}

/// Seats, hands and turn, shared by every live phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub hands: [Hand; PLAYERS],
    pub dealer: Seat,
    pub to_act: Seat,
    pub hand_no: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractView {
    pub trump: Suit,
    pub maker: Seat,
    pub sitting: Option<Seat>,
}

/// Either bidding round. In round two `up_card` is the turned-down card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub table: TableView,
    pub up_card: Card,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscardSnapshot {
    pub table: TableView,
    pub contract: ContractView,
}

/// Trick-playing phase snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub table: TableView,
    pub contract: ContractView,
    pub leader: Seat,
    pub current_trick: Vec<(Seat, Card)>,
    pub trick_score: TrickScore,
    /// Most recent completed trick in this hand.
    pub last_trick: Option<Vec<(Seat, Card)>>,
    /// Cards the seat to act may play.
    pub playable: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameOverSnapshot {
    pub winning_team: Team,
}

/// Entry point: produce a snapshot of the current game state.
pub fn snapshot(phase: &Phase) -> GameSnapshot {
    let data = match phase {
        Phase::BidOne(p) => PhaseSnapshot::BidOne(BiddingSnapshot {
            table: table_view(&p.table),
            up_card: p.up_card,
        }),
        Phase::BidTwo(p) => PhaseSnapshot::BidTwo(BiddingSnapshot {
            table: table_view(&p.table),
            up_card: p.up_card,
        }),
        Phase::Discard(p) => PhaseSnapshot::Discard(DiscardSnapshot {
            table: table_view(&p.table),
            contract: contract_view(&p.contract),
        }),
        Phase::PlayCards(p) => PhaseSnapshot::PlayCards(snapshot_trick(p)),
        Phase::GameOver(over) => PhaseSnapshot::GameOver(GameOverSnapshot {
            winning_team: over.winning_team,
        }),
    };
    GameSnapshot {
        score: phase.score(),
        phase: data,
    }
}

fn table_view(table: &Table) -> TableView {
    TableView {
        hands: table.hands.clone(),
        dealer: table.dealer,
        to_act: table.turn,
        hand_no: table.hand_no,
    }
}

fn contract_view(contract: &Contract) -> ContractView {
    ContractView {
        trump: contract.trump,
        maker: contract.maker,
        sitting: contract.sitting,
    }
}

fn plays_of(trick: &Trick) -> Vec<(Seat, Card)> {
    trick.plays().to_vec()
}

fn snapshot_trick(phase: &PlayCardsPhase) -> TrickSnapshot {
    TrickSnapshot {
        table: table_view(&phase.table),
        contract: contract_view(&phase.contract),
        leader: phase.trick.leader(),
        current_trick: plays_of(&phase.trick),
        trick_score: phase.trick_score,
        last_trick: phase.last_trick.as_ref().map(plays_of),
        playable: legal_plays(phase),
    }
}
