use super::rank::Rank;
use super::suit::Suit;
use odk_core::DECK_SIZE;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank. Two cards are equal iff
/// their rank and suit match.
///
/// # Parsing
///
/// Cards parse from short tokens like `"AS"` (ace of spades), `"td"` or
/// `"10D"` (ten of diamonds). The canonical [`Card::code`] is always the
/// two-character uppercase form.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Two-character display token, e.g. `AS` or `TD`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// TS
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < DECK_SIZE {
            true => Ok(Self(n)),
            false => Err(format!("invalid card u8: {}", n)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// A card token that names none of the 52 cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCard(pub String);

impl std::fmt::Display for InvalidCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid card name: {:?}", self.0)
    }
}

impl std::error::Error for InvalidCard {}

/// str isomorphism
/// the last character is the suit, everything before it is the rank
impl TryFrom<&str> for Card {
    type Error = InvalidCard;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let split = token
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .filter(|i| *i > 0)
            .ok_or_else(|| InvalidCard(s.to_string()))?;
        let rank = Rank::try_from(&token[..split]).map_err(|_| InvalidCard(s.to_string()))?;
        let suit = Suit::try_from(&token[split..]).map_err(|_| InvalidCard(s.to_string()))?;
        Ok(Card::from((rank, suit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::King, Suit::D));
        assert!(card.rank() == Rank::King);
        assert!(card.suit() == Suit::D);
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::try_from(n).unwrap()));
        }
    }

    #[test]
    fn out_of_range_u8() {
        assert!(Card::try_from(52u8).is_err());
        assert!(Card::try_from(u8::MAX).is_err());
    }

    #[test]
    fn codes() {
        assert_eq!(Card::from((Rank::Ace, Suit::S)).code(), "AS");
        assert_eq!(Card::from((Rank::King, Suit::D)).code(), "KD");
        assert_eq!(Card::from((Rank::Ten, Suit::C)).code(), "TC");
        assert_eq!(Card::from((Rank::Two, Suit::H)).code(), "2H");
    }

    #[test]
    fn parse_tokens() {
        let ace = Card::from((Rank::Ace, Suit::S));
        assert_eq!(Card::try_from("AS"), Ok(ace));
        assert_eq!(Card::try_from("as"), Ok(ace));
        assert_eq!(Card::try_from(" As "), Ok(ace));
        assert_eq!(Card::try_from("10D"), Card::try_from("TD"));
    }

    #[test]
    fn reject_tokens() {
        for bad in ["", "A", "S", "XX", "1S", "AX", "ASS", "A♠♠"] {
            assert_eq!(Card::try_from(bad), Err(InvalidCard(bad.to_string())), "{}", bad);
        }
    }

    #[test]
    fn unicode_suits() {
        assert_eq!(Card::try_from("A♠"), Ok(Card::from((Rank::Ace, Suit::S))));
    }
}
