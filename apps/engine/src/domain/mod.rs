//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod discard;
pub mod phases;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_snapshot_phases;

// Re-exports for ergonomics
pub use bidding::{BidPhaseOne, BidPhaseTwo};
pub use cards_logic::{card_beats, hand_has_suit, relative_rank, relative_suit};
pub use cards_parsing::parse_hand;
pub use cards_types::{Card, Color, Rank, Suit};
pub use dealing::{deal, deal_with_seed, Deal, Deck};
pub use discard::DiscardPhase;
pub use game_transition::{derive_transitions, GameTransition};
pub use phases::{Contract, GameOver, Move, MoveName, Phase, PhaseTag};
pub use seed_derivation::derive_dealing_seed;
pub use snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
pub use state::{Seat, Table, Team};
pub use tricks::{legal_plays, PlayCardsPhase, Trick};
