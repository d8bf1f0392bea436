use crate::domain::cards_logic::{follows_suit, hand_has_suit, relative_rank, relative_suit};
use crate::domain::rules::{trick_size, TRICKS_PER_HAND};
use crate::domain::scoring::score_round;
use crate::domain::state::{next_active_seat, team_of, Seat, Table, TrickScore};
use crate::domain::{Card, Contract, Phase, Suit};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Cards played to one trick, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    plays: Vec<(Seat, Card)>,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    /// Ordered plays (who, card).
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// Record a play. No rules are checked beyond one card per seat.
    pub fn add_card(&mut self, seat: Seat, card: Card) -> Result<(), DomainError> {
        if self.card_of(seat).is_some() {
            return Err(DomainError::illegal(
                IllegalMoveKind::AlreadyPlayed,
                format!("seat {seat} already played to this trick"),
            ));
        }
        self.plays.push((seat, card));
        Ok(())
    }

    /// First card played, if any.
    pub fn led(&self) -> Option<Card> {
        self.plays.first().map(|&(_, c)| c)
    }

    /// Relative suit of the led card.
    pub fn led_suit(&self, trump: Suit) -> Option<Suit> {
        self.led().map(|c| relative_suit(c, trump))
    }

    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.plays
            .iter()
            .find(|(s, _)| *s == seat)
            .map(|&(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_full(&self, sitting: Option<Seat>) -> bool {
        self.plays.len() == trick_size(sitting.is_some())
    }

    /// Seat holding the strongest card so far.
    pub fn winner(&self, trump: Suit) -> Option<Seat> {
        let led = self.led_suit(trump);
        self.plays
            .iter()
            .max_by_key(|&&(_, c)| relative_rank(c, trump, led))
            .map(|&(seat, _)| seat)
    }
}

/// Card play, from the first lead until the fifth trick is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardsPhase {
    pub table: Table,
    pub contract: Contract,
    pub trick: Trick,
    pub trick_score: TrickScore,
    /// Most recently completed trick in this hand.
    pub last_trick: Option<Trick>,
}

impl PlayCardsPhase {
    /// Start play with `table.turn` leading the first trick.
    pub fn new(table: Table, contract: Contract) -> Self {
        let trick = Trick::new(table.turn);
        Self {
            table,
            contract,
            trick,
            trick_score: [0, 0],
            last_trick: None,
        }
    }

    pub fn trump(&self) -> Suit {
        self.contract.trump
    }

    /// Play a card for the seat holding the turn.
    pub fn play(&self, card: Card) -> Result<Phase, DomainError> {
        let seat = self.table.turn;
        let trump = self.trump();

        let Some(pos) = self.table.hand(seat).iter().position(|&c| c == card) else {
            return Err(DomainError::illegal(
                IllegalMoveKind::CardNotInHand,
                format!("{card} is not in seat {seat}'s hand"),
            ));
        };

        let led = self.trick.led_suit(trump);
        if let Some(led_suit) = led {
            if !follows_suit(card, trump, led)
                && hand_has_suit(self.table.hand(seat), led_suit, trump)
            {
                return Err(DomainError::illegal(
                    IllegalMoveKind::MustFollowSuit,
                    format!("seat {seat} must follow {led_suit}"),
                ));
            }
        }

        let mut next = self.clone();
        let played = next.table.hands[seat as usize].remove(pos);
        next.trick.add_card(seat, played)?;

        let sitting = next.contract.sitting;
        if !next.trick.is_full(sitting) {
            next.table.turn = next_active_seat(seat, sitting);
            return Ok(Phase::PlayCards(next));
        }

        let winner = next
            .trick
            .winner(trump)
            .ok_or_else(|| DomainError::invariant("full trick without a winner"))?;
        next.trick_score[team_of(winner) as usize] += 1;

        if next.trick_score.iter().sum::<u8>() == TRICKS_PER_HAND {
            return score_round(&next);
        }

        next.last_trick = Some(std::mem::replace(&mut next.trick, Trick::new(winner)));
        next.table.turn = winner;
        Ok(Phase::PlayCards(next))
    }
}

/// Cards the seat holding the turn may legally play.
pub fn legal_plays(phase: &PlayCardsPhase) -> Vec<Card> {
    let trump = phase.trump();
    let hand = phase.table.current_hand();
    let Some(led) = phase.trick.led_suit(trump) else {
        return hand.clone();
    };
    if hand_has_suit(hand, led, trump) {
        hand.iter()
            .copied()
            .filter(|&c| relative_suit(c, trump) == led)
            .collect()
    } else {
        hand.clone()
    }
}
