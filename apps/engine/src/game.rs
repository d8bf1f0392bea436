//! Move dispatcher: owns the current phase and routes named moves into it.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::bidding::BidPhaseOne;
use crate::domain::dealing::deal_with_seed;
use crate::domain::game_transition::{derive_transitions, GameTransition};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{left_of, Seat, Table};
use crate::domain::{Move, MoveName, Phase};
use crate::errors::domain::{DomainError, IllegalMoveKind, ParseKind};

/// Deal the first hand of a new game with seat 0 dealing.
pub fn new_game(seed: u64) -> Result<Phase, DomainError> {
    new_game_with_dealer(seed, 0)
}

/// Deal the first hand of a new game.
pub fn new_game_with_dealer(seed: u64, dealer: Seat) -> Result<Phase, DomainError> {
    if dealer as usize >= PLAYERS {
        return Err(DomainError::parse(
            ParseKind::Argument,
            format!("dealer seat {dealer} is not at the table"),
        ));
    }
    let hand_no = 1;
    let dealt = deal_with_seed(derive_dealing_seed(seed, hand_no))?;
    let table = Table {
        score: [0, 0],
        hands: dealt.hands,
        dealer,
        turn: left_of(dealer),
        game_seed: seed,
        hand_no,
    };
    Ok(Phase::BidOne(BidPhaseOne::new(table, dealt.up_card)))
}

/// Apply a named move to `phase` without touching it.
///
/// Checks run in order: the move name, the turn, the arguments, then the
/// rules of the current phase.
pub fn perform_move(
    phase: &Phase,
    name: &str,
    player: Seat,
    args: &[&str],
) -> Result<Phase, DomainError> {
    let name: MoveName = name.parse()?;
    check_turn(phase, name, player)?;
    let mv = Move::parse(name, args)?;
    phase.apply(&mv)
}

fn check_turn(phase: &Phase, name: MoveName, player: Seat) -> Result<(), DomainError> {
    match phase.turn() {
        Some(actual) if actual != player => Err(DomainError::out_of_turn(player, actual)),
        Some(_) => Ok(()),
        None => Err(DomainError::illegal(
            IllegalMoveKind::GameOver,
            format!("{name} after the game ended"),
        )),
    }
}

/// A running game. The held phase is replaced only when a move succeeds.
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    last_transitions: Vec<GameTransition>,
}

impl Game {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            last_transitions: Vec::new(),
        }
    }

    /// Start a game as configured.
    pub fn from_config(config: &EngineConfig) -> Result<Self, DomainError> {
        let seed = config.resolve_seed();
        info!(seed, dealer = config.first_dealer, "New game");
        Ok(Self::new(new_game_with_dealer(seed, config.first_dealer)?))
    }

    pub fn state(&self) -> &Phase {
        &self.phase
    }

    pub fn into_state(self) -> Phase {
        self.phase
    }

    /// Events produced by the last successful move.
    pub fn transitions(&self) -> &[GameTransition] {
        &self.last_transitions
    }

    /// Parse and apply a named move for `player`.
    pub fn perform_move(
        &mut self,
        name: &str,
        player: Seat,
        args: &[&str],
    ) -> Result<&Phase, DomainError> {
        let name = name.parse::<MoveName>().inspect_err(|e| {
            debug!(player, error = %e, "Move rejected");
        })?;
        let mv = check_turn(&self.phase, name, player)
            .and_then(|_| Move::parse(name, args))
            .inspect_err(|e| debug!(player, %name, error = %e, "Move rejected"))?;
        self.apply(player, mv)
    }

    /// Apply an already parsed move for `player`.
    pub fn apply(&mut self, player: Seat, mv: Move) -> Result<&Phase, DomainError> {
        check_turn(&self.phase, mv.name(), player)?;
        let next = self.phase.apply(&mv).inspect_err(|e| {
            debug!(player, ?mv, phase = %self.phase.tag(), error = %e, "Move rejected");
        })?;

        debug!(
            player,
            ?mv,
            from = %self.phase.tag(),
            to = %next.tag(),
            "Move applied"
        );

        let transitions = derive_transitions(&self.phase, &next);
        for t in &transitions {
            if let GameTransition::TrumpMade {
                trump,
                maker,
                alone,
            } = t
            {
                info!(%trump, maker, alone, "Trump made");
            }
        }
        self.last_transitions = transitions;
        self.phase = next;
        Ok(&self.phase)
    }
}
