use serde::Deserialize;
use serde::Serialize;

/// Query string of `POST /decks`: `?cards=AS,KD,2C`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CardsQuery {
    #[serde(default)]
    pub cards: Option<String>,
}

impl CardsQuery {
    /// Comma-separated card tokens, in order. Absent or blank means none,
    /// which the repository reads as a full deck.
    pub fn names(&self) -> Vec<String> {
        self.cards
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split(',').map(str::trim).map(String::from).collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /decks`. May be omitted entirely.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateDeck {
    #[serde(default)]
    pub shuffled: bool,
}

/// Body of `POST /decks/{id}/draw`.
///
/// Signed on purpose: negative counts reach the repository and are refused
/// there as an invalid count rather than as a malformed body.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawCards {
    pub count: i64,
}
