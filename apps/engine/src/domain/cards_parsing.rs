//! Card text form: a rank token and a suit token joined by a dot ("A.S", "10.D").

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ParseKind};

impl Rank {
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Suit {
    pub const fn token(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.token())
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.token())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.rank, self.suit)
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(DomainError::parse(ParseKind::Rank, format!("Parse rank: {s}"))),
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(DomainError::parse(ParseKind::Suit, format!("Parse suit: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank_tok, suit_tok) = s
            .split_once('.')
            .ok_or_else(|| DomainError::parse(ParseKind::Card, format!("Parse card: {s}")))?;
        let rank = rank_tok
            .parse::<Rank>()
            .map_err(|_| DomainError::parse(ParseKind::Card, format!("Parse card: {s}")))?;
        let suit = suit_tok
            .parse::<Suit>()
            .map_err(|_| DomainError::parse(ParseKind::Card, format!("Parse card: {s}")))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "A.S", "10.D") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Parse a whitespace-separated hand such as `"A.S K.S J.S Q.H 9.D"`.
pub fn parse_hand(s: &str) -> Result<Vec<Card>, DomainError> {
    try_parse_cards(s.split_whitespace())
}
