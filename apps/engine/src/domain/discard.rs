use crate::domain::rules::HAND_SIZE;
use crate::domain::state::{first_leader, Table};
use crate::domain::tricks::PlayCardsPhase;
use crate::domain::{Card, Contract, Phase};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Dealer holds the up-card and must put one card away. Turn stays on the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPhase {
    pub table: Table,
    pub contract: Contract,
}

impl DiscardPhase {
    pub fn new(table: Table, contract: Contract) -> Self {
        Self { table, contract }
    }

    pub fn discard(&self, card: Card) -> Result<Phase, DomainError> {
        let dealer = self.table.dealer;
        let hand = self.table.hand(dealer);
        if hand.len() != HAND_SIZE + 1 {
            return Err(DomainError::illegal(
                IllegalMoveKind::NothingToDiscard,
                format!("dealer holds {} cards", hand.len()),
            ));
        }
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(DomainError::illegal(
                IllegalMoveKind::CardNotInHand,
                format!("{card} is not in the dealer's hand"),
            ));
        };

        let mut table = self.table.clone();
        table.hands[dealer as usize].remove(pos);
        table.turn = first_leader(dealer, self.contract.sitting);
        Ok(Phase::PlayCards(PlayCardsPhase::new(
            table,
            self.contract.clone(),
        )))
    }
}
