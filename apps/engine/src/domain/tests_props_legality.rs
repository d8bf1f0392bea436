use proptest::prelude::*;

use crate::domain::cards_logic::relative_suit;
use crate::domain::state::Table;
use crate::domain::tricks::{legal_plays, PlayCardsPhase};
use crate::domain::{test_gens, test_prelude, Contract, Phase};
use crate::errors::domain::IllegalMoveKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: following seats may only play the led suit when they hold it,
    /// and anything when they do not. `play` agrees with `legal_plays`.
    #[test]
    fn prop_follow_suit_legality((hand, lead, trump) in test_gens::hand_and_lead()) {
        let table = Table {
            score: [0, 0],
            hands: [vec![lead], hand.clone(), Vec::new(), Vec::new()],
            dealer: 3,
            turn: 0,
            game_seed: 0,
            hand_no: 1,
        };
        let start = PlayCardsPhase::new(table, Contract::new(trump, 0, false));
        let Phase::PlayCards(phase) = start.play(lead).unwrap() else {
            panic!("one card does not end a trick");
        };
        prop_assert_eq!(phase.table.turn, 1);

        let led = relative_suit(lead, trump);
        let can_follow = hand.iter().any(|&c| relative_suit(c, trump) == led);
        let legal = legal_plays(&phase);

        if can_follow {
            prop_assert!(legal.iter().all(|&c| relative_suit(c, trump) == led));
        } else {
            prop_assert_eq!(&legal, &hand);
        }

        for &card in &hand {
            let result = phase.play(card);
            if legal.contains(&card) {
                prop_assert!(result.is_ok());
            } else {
                let err = result.unwrap_err();
                prop_assert_eq!(err.illegal_kind(), Some(IllegalMoveKind::MustFollowSuit));
            }
        }
    }
}
