//! The two bidding rounds.

use crate::domain::state::{left_of, Table};
use crate::domain::tricks::PlayCardsPhase;
use crate::domain::{Card, Contract, DiscardPhase, Phase, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// First round: seats may order the dealer to pick up the up-card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidPhaseOne {
    pub table: Table,
    pub up_card: Card,
}

impl BidPhaseOne {
    pub fn new(table: Table, up_card: Card) -> Self {
        Self { table, up_card }
    }

    /// Order the up-card up; its suit becomes trump.
    ///
    /// The dealer picks it up and must discard, unless the maker goes alone
    /// with the dealer as partner. Then the dealer sits out, the up-card stays
    /// down and the seat left of the maker leads at once.
    pub fn call(&self, alone: bool) -> Phase {
        let contract = Contract::new(self.up_card.suit, self.table.turn, alone);
        let dealer = self.table.dealer;
        let mut table = self.table.clone();

        if contract.sitting == Some(dealer) {
            table.turn = contract.opening_leader(dealer);
            return Phase::PlayCards(PlayCardsPhase::new(table, contract));
        }

        table.hands[dealer as usize].push(self.up_card);
        table.turn = dealer;
        Phase::Discard(DiscardPhase::new(table, contract))
    }

    /// Pass; once the dealer passes, the up-card is turned down.
    pub fn pass_bid(&self) -> Phase {
        let mut table = self.table.clone();
        if table.turn == table.dealer {
            table.turn = left_of(table.dealer);
            return Phase::BidTwo(BidPhaseTwo::new(table, self.up_card));
        }
        table.turn = left_of(table.turn);
        Phase::BidOne(BidPhaseOne::new(table, self.up_card))
    }
}

/// Second round: any suit but the turned-down one may be named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidPhaseTwo {
    pub table: Table,
    /// The turned-down card.
    pub up_card: Card,
}

impl BidPhaseTwo {
    pub fn new(table: Table, up_card: Card) -> Self {
        Self { table, up_card }
    }

    /// Name trump. No discard follows; a lone maker's left-hand opponent
    /// leads, otherwise the seat left of the dealer.
    pub fn call(&self, alone: bool, trump: Suit) -> Result<Phase, DomainError> {
        if trump == self.up_card.suit {
            return Err(DomainError::illegal(
                IllegalMoveKind::TurnedDownSuit,
                format!("{trump} was turned down this hand"),
            ));
        }
        let contract = Contract::new(trump, self.table.turn, alone);
        let mut table = self.table.clone();
        table.turn = contract.opening_leader(table.dealer);
        Ok(Phase::PlayCards(PlayCardsPhase::new(table, contract)))
    }

    pub fn pass_bid(&self) -> Result<Phase, DomainError> {
        if self.table.turn == self.table.dealer {
            return Err(DomainError::illegal(
                IllegalMoveKind::DealerStuck,
                "dealer is stuck and must name trump",
            ));
        }
        let mut table = self.table.clone();
        table.turn = left_of(table.turn);
        Ok(Phase::BidTwo(BidPhaseTwo::new(table, self.up_card)))
    }
}
