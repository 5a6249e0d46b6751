use odk_cards::InvalidCard;

/// Everything a repository operation can refuse to do.
///
/// None of these are retried internally; they are handed back to the
/// caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A requested card token names none of the 52 cards.
    InvalidCardName(String),
    /// Every candidate identifier collided with a stored deck.
    IdGenerationFailed { attempts: usize },
    /// A deck identifier that is not a well-formed UUID.
    InvalidId(String),
    /// A well-formed identifier with no stored deck behind it.
    DeckNotFound(String),
    /// A draw asked for more cards than remain.
    InsufficientCards { requested: usize, remaining: usize },
    /// A draw asked for a negative number of cards.
    InvalidCount(i64),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCardName(s) => write!(f, "invalid card name: {:?}", s),
            Self::IdGenerationFailed { attempts } => {
                write!(f, "failed to generate unique id after {} attempts", attempts)
            }
            Self::InvalidId(s) => write!(f, "id is not a valid uuid: {:?}", s),
            Self::DeckNotFound(s) => write!(f, "deck does not exist for id {}", s),
            Self::InsufficientCards {
                requested,
                remaining,
            } => write!(
                f,
                "insufficient cards: requested {}, {} remaining",
                requested, remaining
            ),
            Self::InvalidCount(n) => write!(f, "invalid draw count: {}", n),
        }
    }
}

impl std::error::Error for DeckError {}

impl From<InvalidCard> for DeckError {
    fn from(e: InvalidCard) -> Self {
        Self::InvalidCardName(e.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_invalid_card() {
        let e = DeckError::from(InvalidCard("XX".into()));
        assert_eq!(e, DeckError::InvalidCardName("XX".into()));
    }

    #[test]
    fn messages() {
        let e = DeckError::InsufficientCards {
            requested: 5,
            remaining: 2,
        };
        assert_eq!(e.to_string(), "insufficient cards: requested 5, 2 remaining");
        assert_eq!(
            DeckError::IdGenerationFailed { attempts: 10 }.to_string(),
            "failed to generate unique id after 10 attempts"
        );
    }
}
