pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const HAND_SIZE: usize = 5;
pub const TRICKS_PER_HAND: u8 = 5;
pub const POINTS_TO_WIN: u8 = 10;

/// Points for defenders who take the majority against the makers.
pub const EUCHRE_POINTS: u8 = 2;
/// Points for makers taking all five tricks with a partner.
pub const MARCH_POINTS: u8 = 2;
/// Points for a lone maker taking all five tricks.
pub const LONE_MARCH_POINTS: u8 = 4;
/// Points for makers taking three or four tricks.
pub const MAKE_POINTS: u8 = 1;

/// Points awarded for a finished hand.
///
/// `makers_won` is whether the makers' team took the majority; `tricks` is
/// the number of tricks the winning team took.
pub fn hand_points(makers_won: bool, tricks: u8, alone: bool) -> u8 {
    if !makers_won {
        return EUCHRE_POINTS;
    }
    if tricks == TRICKS_PER_HAND {
        if alone {
            LONE_MARCH_POINTS
        } else {
            MARCH_POINTS
        }
    } else {
        MAKE_POINTS
    }
}

/// Cards per trick: one fewer when a seat sits out.
pub fn trick_size(someone_sitting: bool) -> usize {
    if someone_sitting {
        PLAYERS - 1
    } else {
        PLAYERS
    }
}
