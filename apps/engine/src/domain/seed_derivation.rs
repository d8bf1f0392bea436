//! RNG seed derivation for deterministic dealing.
//!
//! Every hand of a game is dealt from its own seed, derived from the game
//! seed and the hand number, so any phase can deal the next hand without
//! shared RNG state.

/// Derive a seed for dealing one hand.
///
/// # Arguments
///
/// * `game_seed` - Base seed chosen when the game was created
/// * `hand_no` - 1-based hand number within the game
pub fn derive_dealing_seed(game_seed: u64, hand_no: u32) -> u64 {
    game_seed
        .wrapping_add((hand_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
