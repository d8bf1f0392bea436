//! End-of-hand scoring and the move to the next hand.

use tracing::info;

use crate::domain::bidding::BidPhaseOne;
use crate::domain::dealing::deal_with_seed;
use crate::domain::rules::{hand_points, POINTS_TO_WIN};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{left_of, GameScore, Table, Team, TrickScore};
use crate::domain::tricks::PlayCardsPhase;
use crate::domain::{GameOver, Phase};
use crate::errors::domain::DomainError;

/// Team that took the majority of tricks.
pub fn hand_winner(trick_score: &TrickScore) -> Team {
    if trick_score[0] > trick_score[1] {
        0
    } else {
        1
    }
}

/// First team at or past the winning total, if any.
pub fn winning_team(score: &GameScore) -> Option<Team> {
    score
        .iter()
        .position(|&s| s >= POINTS_TO_WIN)
        .map(|t| t as Team)
}

/// Credit the finished hand and move on.
pub fn score_round(phase: &PlayCardsPhase) -> Result<Phase, DomainError> {
    let winner = hand_winner(&phase.trick_score);
    let makers_won = winner == phase.contract.maker_team();
    let points = hand_points(
        makers_won,
        phase.trick_score[winner as usize],
        phase.contract.alone(),
    );

    let mut score = phase.table.score;
    score[winner as usize] += points;

    info!(
        hand_no = phase.table.hand_no,
        team = winner,
        points,
        makers_won,
        score = ?score,
        "Hand scored"
    );

    next_hand_or_victory(score, &phase.table)
}

/// End the game, or deal the next hand with the deal passing left.
pub fn next_hand_or_victory(score: GameScore, table: &Table) -> Result<Phase, DomainError> {
    if let Some(team) = winning_team(&score) {
        info!(winning_team = team, score = ?score, "Game over");
        return Ok(Phase::GameOver(GameOver {
            winning_team: team,
            score,
        }));
    }

    let hand_no = table.hand_no + 1;
    let dealer = left_of(table.dealer);
    let dealt = deal_with_seed(derive_dealing_seed(table.game_seed, hand_no))?;
    let next = Table {
        score,
        hands: dealt.hands,
        dealer,
        turn: left_of(dealer),
        game_seed: table.game_seed,
        hand_no,
    };
    Ok(Phase::BidOne(BidPhaseOne::new(next, dealt.up_card)))
}
