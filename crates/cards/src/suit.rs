/// Card suit: clubs, diamonds, hearts, spades.
///
/// The ordering (C < D < H < S) is arbitrary but fixed, and together with
/// [`Rank`] it determines the canonical order of [`Catalog::full`].
///
/// [`Rank`]: super::rank::Rank
/// [`Catalog::full`]: super::catalog::Catalog::full
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Long display name, as shown to API clients.
    pub const fn name(&self) -> &'static str {
        match self {
            Suit::C => "CLUBS",
            Suit::D => "DIAMONDS",
            Suit::H => "HEARTS",
            Suit::S => "SPADES",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "C" | "♣" => Ok(Suit::C),
            "D" | "♦" => Ok(Suit::D),
            "H" | "♥" => Ok(Suit::H),
            "S" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "C"),
            Suit::D => write!(f, "D"),
            Suit::H => write!(f, "H"),
            Suit::S => write!(f, "S"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn bijective_str() {
        for suit in Suit::all() {
            assert!(suit == Suit::try_from(suit.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(Suit::try_from("s"), Ok(Suit::S));
        assert_eq!(Suit::try_from("♦"), Ok(Suit::D));
        assert!(Suit::try_from("x").is_err());
    }
}
