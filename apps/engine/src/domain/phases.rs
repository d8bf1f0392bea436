//! The game as a closed set of phases, and the moves that drive it.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{BidPhaseOne, BidPhaseTwo};
use crate::domain::discard::DiscardPhase;
use crate::domain::state::{
    first_leader, next_active_seat, partner_of, team_of, GameScore, Seat, Table, Team,
};
use crate::domain::tricks::PlayCardsPhase;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind, ParseKind};

/// Trump and who named it, fixed once a call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub trump: Suit,
    pub maker: Seat,
    /// Maker's partner when the maker goes alone.
    pub sitting: Option<Seat>,
}

impl Contract {
    pub fn new(trump: Suit, maker: Seat, alone: bool) -> Self {
        Self {
            trump,
            maker,
            sitting: alone.then(|| partner_of(maker)),
        }
    }

    pub fn alone(&self) -> bool {
        self.sitting.is_some()
    }

    pub fn maker_team(&self) -> Team {
        team_of(self.maker)
    }

    /// Leader of the first trick when play starts straight from bidding.
    ///
    /// A lone maker's left-hand opponent leads; otherwise the seat left of
    /// the dealer does.
    pub fn opening_leader(&self, dealer: Seat) -> Seat {
        if self.alone() {
            next_active_seat(self.maker, self.sitting)
        } else {
            first_leader(dealer, self.sitting)
        }
    }
}

/// Terminal phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    pub winning_team: Team,
    /// Final score.
    pub score: GameScore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    BidOne(BidPhaseOne),
    BidTwo(BidPhaseTwo),
    Discard(DiscardPhase),
    PlayCards(PlayCardsPhase),
    GameOver(GameOver),
}

/// Short phase name used in snapshots and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTag {
    #[serde(rename = "bid1")]
    BidOne,
    #[serde(rename = "bid2")]
    BidTwo,
    #[serde(rename = "discard")]
    Discard,
    #[serde(rename = "play")]
    PlayCards,
    #[serde(rename = "gameover")]
    GameOver,
}

impl PhaseTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            PhaseTag::BidOne => "bid1",
            PhaseTag::BidTwo => "bid2",
            PhaseTag::Discard => "discard",
            PhaseTag::PlayCards => "play",
            PhaseTag::GameOver => "gameover",
        }
    }
}

impl Display for PhaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recognized move verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveName {
    Call,
    PassBid,
    Discard,
    Play,
}

impl MoveName {
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveName::Call => "call",
            MoveName::PassBid => "pass_bid",
            MoveName::Discard => "discard",
            MoveName::Play => "play",
        }
    }
}

impl Display for MoveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(MoveName::Call),
            "pass_bid" => Ok(MoveName::PassBid),
            "discard" => Ok(MoveName::Discard),
            "play" => Ok(MoveName::Play),
            other => Err(DomainError::unknown_move(other)),
        }
    }
}

/// A fully parsed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Name trump. Round one may omit the suit or repeat the up-card's.
    Call { alone: bool, trump: Option<Suit> },
    PassBid,
    Discard(Card),
    Play(Card),
}

impl Move {
    pub fn name(&self) -> MoveName {
        match self {
            Move::Call { .. } => MoveName::Call,
            Move::PassBid => MoveName::PassBid,
            Move::Discard(_) => MoveName::Discard,
            Move::Play(_) => MoveName::Play,
        }
    }

    /// Build a move from its verb and textual arguments.
    ///
    /// `call` takes `alone` (`true`/`false`) and an optional suit; `discard`
    /// and `play` take one card; `pass_bid` takes nothing.
    pub fn parse(name: MoveName, args: &[&str]) -> Result<Self, DomainError> {
        match name {
            MoveName::Call => match args {
                [alone] => Ok(Move::Call {
                    alone: parse_bool(alone)?,
                    trump: None,
                }),
                [alone, trump] => Ok(Move::Call {
                    alone: parse_bool(alone)?,
                    trump: Some(trump.parse()?),
                }),
                _ => Err(arity(name, "1 or 2", args.len())),
            },
            MoveName::PassBid => match args {
                [] => Ok(Move::PassBid),
                _ => Err(arity(name, "0", args.len())),
            },
            MoveName::Discard => match args {
                [card] => Ok(Move::Discard(card.parse()?)),
                _ => Err(arity(name, "1", args.len())),
            },
            MoveName::Play => match args {
                [card] => Ok(Move::Play(card.parse()?)),
                _ => Err(arity(name, "1", args.len())),
            },
        }
    }
}

fn parse_bool(s: &str) -> Result<bool, DomainError> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DomainError::parse(
            ParseKind::Argument,
            format!("expected true or false, got {s:?}"),
        ))
    }
}

fn arity(name: MoveName, expected: &str, got: usize) -> DomainError {
    DomainError::parse(
        ParseKind::Argument,
        format!("{name} takes {expected} argument(s), got {got}"),
    )
}

impl Phase {
    pub fn tag(&self) -> PhaseTag {
        match self {
            Phase::BidOne(_) => PhaseTag::BidOne,
            Phase::BidTwo(_) => PhaseTag::BidTwo,
            Phase::Discard(_) => PhaseTag::Discard,
            Phase::PlayCards(_) => PhaseTag::PlayCards,
            Phase::GameOver(_) => PhaseTag::GameOver,
        }
    }

    /// Shared table state; `None` once the game is over.
    pub fn table(&self) -> Option<&Table> {
        match self {
            Phase::BidOne(p) => Some(&p.table),
            Phase::BidTwo(p) => Some(&p.table),
            Phase::Discard(p) => Some(&p.table),
            Phase::PlayCards(p) => Some(&p.table),
            Phase::GameOver(_) => None,
        }
    }

    /// Seat expected to move next.
    pub fn turn(&self) -> Option<Seat> {
        self.table().map(|t| t.turn)
    }

    pub fn score(&self) -> GameScore {
        match self {
            Phase::GameOver(over) => over.score,
            live => live.table().map(|t| t.score).unwrap_or_default(),
        }
    }

    pub fn contract(&self) -> Option<&Contract> {
        match self {
            Phase::Discard(p) => Some(&p.contract),
            Phase::PlayCards(p) => Some(&p.contract),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    /// Apply a move for the seat holding the turn, returning the next phase.
    ///
    /// Turn ownership is checked by the caller; `self` is never modified.
    pub fn apply(&self, mv: &Move) -> Result<Phase, DomainError> {
        match (self, *mv) {
            (Phase::BidOne(p), Move::Call { alone, trump }) => match trump {
                Some(suit) if suit != p.up_card.suit => Err(DomainError::illegal(
                    IllegalMoveKind::TrumpNotUpCard,
                    format!("round one trump must be {}", p.up_card.suit),
                )),
                _ => Ok(p.call(alone)),
            },
            (Phase::BidOne(p), Move::PassBid) => Ok(p.pass_bid()),
            (Phase::BidTwo(p), Move::Call { alone, trump }) => match trump {
                Some(suit) => p.call(alone, suit),
                None => Err(DomainError::illegal(
                    IllegalMoveKind::MissingTrump,
                    "round two call must name a suit",
                )),
            },
            (Phase::BidTwo(p), Move::PassBid) => p.pass_bid(),
            (Phase::Discard(p), Move::Discard(card)) => p.discard(card),
            (Phase::PlayCards(p), Move::Play(card)) => p.play(card),
            (Phase::GameOver(_), mv) => Err(DomainError::illegal(
                IllegalMoveKind::GameOver,
                format!("{} after the game ended", mv.name()),
            )),
            (phase, mv) => Err(DomainError::illegal(
                IllegalMoveKind::PhaseMismatch,
                format!("{} is not accepted during {}", mv.name(), phase.tag()),
            )),
        }
    }
}
