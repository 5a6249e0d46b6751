use odk_cards::Card;
use odk_core::Unique;
use odk_decks::Deck;
use odk_decks::DeckError;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCard {
    pub value: String,
    pub suit: String,
    pub code: String,
}

/// Deck summary. Returned on create and shuffle; hides the card order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDeck {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Full deck view, only returned when a deck is explicitly opened.
/// Cards are listed bottom first; the last one is dealt next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOpenDeck {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<ApiCard>,
}

/// Cards dealt by one draw, in the order they came off the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDraw {
    pub cards: Vec<ApiCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub detail: String,
}

impl From<Card> for ApiCard {
    fn from(card: Card) -> Self {
        Self {
            value: card.rank().name().to_string(),
            suit: card.suit().name().to_string(),
            code: card.code(),
        }
    }
}

impl From<&Deck> for ApiDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
        }
    }
}

impl From<&Deck> for ApiOpenDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
            cards: deck.cards().iter().copied().map(ApiCard::from).collect(),
        }
    }
}

impl From<Vec<Card>> for ApiDraw {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().map(ApiCard::from).collect(),
        }
    }
}

impl From<&DeckError> for ApiError {
    fn from(e: &DeckError) -> Self {
        let (kind, title) = match e {
            DeckError::InvalidCardName(_) => ("INVALID_CARD_NAME", "invalid name"),
            DeckError::IdGenerationFailed { .. } => ("INTERNAL_SERVER_ERROR", "unique id not generated"),
            DeckError::InvalidId(_) => ("INVALID_RESOURCE_ID", "invalid deck id"),
            DeckError::DeckNotFound(_) => ("INVALID_RESOURCE_ID", "resource not found"),
            DeckError::InsufficientCards { .. } => ("INVALID_DRAW", "insufficient cards"),
            DeckError::InvalidCount(_) => ("INVALID_DRAW", "invalid draw count"),
        };
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odk_cards::Catalog;
    use odk_core::ID;

    #[test]
    fn card_fields() {
        let ten = Catalog::resolve(&["10H"]).unwrap()[0];
        let json = serde_json::to_value(ApiCard::from(ten)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "value": "10", "suit": "HEARTS", "code": "TH" })
        );
    }

    #[test]
    fn summary_hides_cards() {
        let deck = Deck::new(ID::default(), Catalog::full());
        let json = serde_json::to_value(ApiDeck::from(&deck)).unwrap();
        assert_eq!(json["remaining"], 52);
        assert_eq!(json["shuffled"], false);
        assert_eq!(json["deck_id"], deck.id().to_string());
        assert!(json.get("cards").is_none());
    }

    #[test]
    fn open_lists_cards_bottom_first() {
        let deck = Deck::new(ID::default(), Catalog::resolve(&["AS", "KD"]).unwrap());
        let open = ApiOpenDeck::from(&deck);
        let codes = open.cards.iter().map(|c| c.code.as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["AS", "KD"]);
        assert_eq!(open.remaining, 2);
    }

    #[test]
    fn error_body() {
        let e = DeckError::DeckNotFound("x".into());
        let json = serde_json::to_value(ApiError::from(&e)).unwrap();
        assert_eq!(json["type"], "INVALID_RESOURCE_ID");
        assert_eq!(json["title"], "resource not found");
        assert_eq!(json["detail"], e.to_string());
    }
}
