use crate::domain::test_state_helpers::{card, initial_bid_one};
use crate::domain::{legal_plays, BidPhaseTwo, Move, Phase, PlayCardsPhase, Suit};
use crate::errors::domain::IllegalMoveKind;

fn passes(n: usize) -> Phase {
    let mut phase = Phase::BidOne(initial_bid_one());
    for _ in 0..n {
        phase = phase.apply(&Move::PassBid).unwrap();
    }
    phase
}

/// Plays the first legal card for each seat until one trick completes.
/// Returns the seats in play order.
fn play_one_trick(mut play: PlayCardsPhase) -> (PlayCardsPhase, Vec<u8>) {
    let mut order = Vec::new();
    while play.last_trick.is_none() {
        order.push(play.table.turn);
        let c = legal_plays(&play)[0];
        play = match play.play(c).unwrap() {
            Phase::PlayCards(p) => p,
            other => panic!("expected play phase, got {:?}", other.tag()),
        };
    }
    (play, order)
}

fn round_two() -> BidPhaseTwo {
    match passes(4) {
        Phase::BidTwo(p) => p,
        other => panic!("expected bid2, got {:?}", other.tag()),
    }
}

#[test]
fn pass_moves_turn_left() {
    let phase = passes(1);
    assert_eq!(phase.turn(), Some(2));
    assert!(matches!(phase, Phase::BidOne(_)));
}

#[test]
fn order_up_hands_dealer_the_up_card() {
    let Phase::Discard(p) = initial_bid_one().call(false) else {
        panic!("expected discard phase");
    };
    assert_eq!(p.table.turn, 0);
    assert_eq!(p.contract.trump, Suit::Diamonds);
    assert_eq!(p.contract.maker, 1);
    assert_eq!(p.contract.sitting, None);
    assert_eq!(p.table.hands[0].len(), 6);
    assert!(p.table.holds(0, card("10.D")));
}

#[test]
fn going_alone_sits_partner() {
    let Phase::Discard(p) = initial_bid_one().call(true) else {
        panic!("expected discard phase");
    };
    assert_eq!(p.contract.sitting, Some(3));
}

#[test]
fn alone_with_dealer_as_partner_skips_discard() {
    let Phase::BidOne(p) = passes(1) else {
        panic!("expected bid1");
    };
    let Phase::PlayCards(play) = p.call(true) else {
        panic!("expected play phase");
    };
    assert_eq!(play.contract.maker, 2);
    assert_eq!(play.contract.sitting, Some(0));
    assert_eq!(play.table.hands[0].len(), 5);
    assert!(!play.table.holds(0, card("10.D")));
    assert_eq!(play.table.turn, 3);
    assert_eq!(play.trick.leader(), 3);
}

#[test]
fn four_passes_turn_the_card_down() {
    let phase = passes(4);
    assert!(matches!(phase, Phase::BidTwo(_)));
    assert_eq!(phase.turn(), Some(1));
}

#[test]
fn round_two_call_goes_straight_to_play() {
    let Phase::PlayCards(p) = round_two().call(false, Suit::Spades).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(p.contract.trump, Suit::Spades);
    assert_eq!(p.contract.maker, 1);
    assert_eq!(p.table.turn, 1);
    assert!(p.table.hands.iter().all(|h| h.len() == 5));
}

#[test]
fn round_two_alone_by_dealers_partner_sits_dealer() {
    let Phase::BidTwo(p) = Phase::BidTwo(round_two()).apply(&Move::PassBid).unwrap() else {
        panic!("expected bid2");
    };
    assert_eq!(p.table.turn, 2);
    let Phase::PlayCards(play) = p.call(true, Suit::Spades).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(play.contract.maker, 2);
    assert_eq!(play.contract.sitting, Some(0));
    assert_eq!(play.trick.leader(), 3);

    let (after, order) = play_one_trick(play);
    assert_eq!(order, vec![3, 1, 2]);
    assert_eq!(after.last_trick.as_ref().map(|t| t.len()), Some(3));
    assert_eq!(after.trick_score.iter().sum::<u8>(), 1);
    assert_eq!(after.table.hands[0].len(), 5);
}

#[test]
fn round_two_alone_left_of_dealer_does_not_lead_own_trick() {
    let Phase::PlayCards(play) = round_two().call(true, Suit::Clubs).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(play.contract.maker, 1);
    assert_eq!(play.contract.sitting, Some(3));
    assert_eq!(play.trick.leader(), 2);

    let (after, order) = play_one_trick(play);
    assert_eq!(order, vec![2, 0, 1]);
    assert_eq!(after.last_trick.as_ref().map(|t| t.len()), Some(3));
    assert_eq!(after.table.hands[3].len(), 5);
}

#[test]
fn round_one_alone_with_discard_keeps_dealer_left_lead() {
    let Phase::Discard(p) = initial_bid_one().call(true) else {
        panic!("expected discard phase");
    };
    let Phase::PlayCards(play) = p.discard(card("10.D")).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(play.contract.sitting, Some(3));
    assert_eq!(play.trick.leader(), 1);
}

#[test]
fn round_two_rejects_turned_down_suit() {
    let err = round_two().call(false, Suit::Diamonds).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::TurnedDownSuit));
}

#[test]
fn dealer_is_stuck_in_round_two() {
    let phase = passes(7);
    assert_eq!(phase.turn(), Some(0));
    let err = phase.apply(&Move::PassBid).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::DealerStuck));
}

#[test]
fn round_one_call_must_name_up_card_suit_if_any() {
    let phase = Phase::BidOne(initial_bid_one());
    let err = phase
        .apply(&Move::Call {
            alone: false,
            trump: Some(Suit::Hearts),
        })
        .unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::TrumpNotUpCard));

    let next = phase
        .apply(&Move::Call {
            alone: false,
            trump: Some(Suit::Diamonds),
        })
        .unwrap();
    assert!(matches!(next, Phase::Discard(_)));
}

#[test]
fn round_two_call_needs_a_suit() {
    let err = Phase::BidTwo(round_two())
        .apply(&Move::Call {
            alone: false,
            trump: None,
        })
        .unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::MissingTrump));
}

#[test]
fn wrong_phase_moves_are_rejected() {
    let phase = Phase::BidOne(initial_bid_one());
    let err = phase.apply(&Move::Discard(card("Q.D"))).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::PhaseMismatch));
    let err = phase.apply(&Move::Play(card("A.C"))).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::PhaseMismatch));
}

#[test]
fn discard_restores_dealer_hand() {
    let before = initial_bid_one().table.hands[0].clone();
    let Phase::Discard(p) = initial_bid_one().call(false) else {
        panic!("expected discard phase");
    };
    let Phase::PlayCards(play) = p.discard(card("10.D")).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(play.table.hands[0], before);
    assert_eq!(play.table.turn, 1);
}

#[test]
fn discard_rejects_card_not_held() {
    let Phase::Discard(p) = initial_bid_one().call(false) else {
        panic!("expected discard phase");
    };
    let err = p.discard(card("10.S")).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::CardNotInHand));
    // The phase is a value; nothing changed.
    assert_eq!(p.table.hands[0].len(), 6);
}

#[test]
fn discard_with_five_cards_is_rejected() {
    let Phase::Discard(mut p) = initial_bid_one().call(false) else {
        panic!("expected discard phase");
    };
    p.table.hands[0].pop();
    let err = p.discard(card("A.S")).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::NothingToDiscard));
}

#[test]
fn discard_skips_sitting_seat_for_the_lead() {
    // Seat 3 calls alone, so seat 1 sits and seat 2 leads.
    let Phase::BidOne(p) = passes(2) else {
        panic!("expected bid1");
    };
    let Phase::Discard(d) = p.call(true) else {
        panic!("expected discard phase");
    };
    assert_eq!(d.contract.sitting, Some(1));
    let Phase::PlayCards(play) = d.discard(card("9.D")).unwrap() else {
        panic!("expected play phase");
    };
    assert_eq!(play.table.turn, 2);
}
