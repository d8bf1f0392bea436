use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::Card;

pub type Seat = u8; // 0..=3
pub type Team = u8; // 0..=1, seat parity

/// One player's cards; five after the deal, six while the dealer holds the up-card.
pub type Hand = Vec<Card>;

/// Points per team, indexed by `Team`.
pub type GameScore = [u8; TEAMS];

/// Tricks taken per team in the current hand.
pub type TrickScore = [u8; TEAMS];

/// Fields shared by every live phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub score: GameScore,
    pub hands: [Hand; PLAYERS],
    pub dealer: Seat,
    /// Seat expected to make the next move.
    pub turn: Seat,
    /// Seed the game was created with; each hand's deal is derived from it.
    pub game_seed: u64,
    /// 1-based hand number within the game.
    pub hand_no: u32,
}

impl Table {
    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat as usize]
    }

    pub fn current_hand(&self) -> &Hand {
        self.hand(self.turn)
    }

    pub fn holds(&self, seat: Seat, card: Card) -> bool {
        self.hand(seat).contains(&card)
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Seats are a ring; "left" is the next seat clockwise (+1). No seat keeps a
/// reference to its neighbours.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Seat to the left (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn left_of(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    seat_offset(seat, 2)
}

#[inline]
pub fn team_of(seat: Seat) -> Team {
    seat % 2
}

/// Next seat to the left that is not sitting out.
#[inline]
pub fn next_active_seat(seat: Seat, sitting: Option<Seat>) -> Seat {
    let next = left_of(seat);
    if Some(next) == sitting {
        left_of(next)
    } else {
        next
    }
}

/// Seat that leads the first trick of a hand: the first active seat left of the dealer.
#[inline]
pub fn first_leader(dealer: Seat, sitting: Option<Seat>) -> Seat {
    next_active_seat(dealer, sitting)
}
