use serde_json::json;

use crate::domain::snapshot::{snapshot, GameSnapshot, PhaseSnapshot};
use crate::domain::test_state_helpers::{card, initial_bid_one, play_phase_start};
use crate::domain::{GameOver, Phase, Suit};

#[test]
fn bidding_snapshot_exposes_up_card_and_turn() {
    let snap = snapshot(&Phase::BidOne(initial_bid_one()));
    assert_eq!(snap.score, [0, 0]);
    let PhaseSnapshot::BidOne(bid) = &snap.phase else {
        panic!("expected bid1 snapshot");
    };
    assert_eq!(bid.up_card, card("10.D"));
    assert_eq!(bid.table.to_act, 1);
    assert_eq!(bid.table.dealer, 0);
    assert_eq!(bid.table.hands[0].len(), 5);

    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["phase"]["phase"], json!("bid1"));
    assert_eq!(value["phase"]["data"]["up_card"], json!("10.D"));
    assert_eq!(
        value["phase"]["data"]["table"]["hands"][1],
        json!(["A.C", "K.C", "J.C", "Q.D", "9.H"])
    );
}

#[test]
fn discard_snapshot_carries_contract() {
    let phase = initial_bid_one().call(true);
    let PhaseSnapshot::Discard(d) = snapshot(&phase).phase else {
        panic!("expected discard snapshot");
    };
    assert_eq!(d.contract.trump, Suit::Diamonds);
    assert_eq!(d.contract.maker, 1);
    assert_eq!(d.contract.sitting, Some(3));
    assert_eq!(d.table.to_act, 0);
}

#[test]
fn trick_snapshot_lists_plays_and_playable() {
    let next = play_phase_start(Suit::Spades).play(card("A.C")).unwrap();
    let PhaseSnapshot::PlayCards(t) = snapshot(&next).phase else {
        panic!("expected play snapshot");
    };
    assert_eq!(t.leader, 1);
    assert_eq!(t.current_trick, vec![(1, card("A.C"))]);
    assert_eq!(t.playable, vec![card("Q.C"), card("9.C")]);
    assert_eq!(t.trick_score, [0, 0]);
    assert_eq!(t.last_trick, None);
}

#[test]
fn game_over_snapshot() {
    let snap = snapshot(&Phase::GameOver(GameOver {
        winning_team: 1,
        score: [6, 10],
    }));
    assert_eq!(snap.score, [6, 10]);
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["phase"], json!({"phase": "gameover", "data": {"winning_team": 1}}));
}

#[test]
fn snapshot_json_reads_back() {
    let next = play_phase_start(Suit::Hearts).play(card("K.C")).unwrap();
    let snap = snapshot(&next);
    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}
