use super::card::Card;
use super::card::InvalidCard;
use super::rank::Rank;
use super::suit::Suit;

/// The fixed universe of 52 valid cards.
///
/// Stateless: every method is a pure lookup against the `(Rank, Suit)`
/// encoding of [`Card`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl Catalog {
    /// All 52 cards in canonical order: rank-major ascending, suits
    /// C < D < H < S within a rank. `2C 2D 2H 2S 3C ... AH AS`.
    ///
    /// Index 0 is the bottom of an unshuffled deck; `AS` ends up on top.
    pub fn full() -> Vec<Card> {
        Rank::all()
            .into_iter()
            .flat_map(|rank| Suit::all().map(|suit| Card::from((rank, suit))))
            .collect()
    }
    /// Resolves card tokens in order. Repeats are kept.
    /// Fails on the first token that names no card.
    pub fn resolve<S>(names: &[S]) -> Result<Vec<Card>, InvalidCard>
    where
        S: AsRef<str>,
    {
        names
            .iter()
            .map(|name| Card::try_from(name.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_is_every_pair_once() {
        let full = Catalog::full();
        let seen = full.iter().copied().collect::<HashSet<_>>();
        assert_eq!(full.len(), 52);
        assert_eq!(seen.len(), 52);
        for rank in Rank::all() {
            for suit in Suit::all() {
                assert!(seen.contains(&Card::from((rank, suit))));
            }
        }
    }

    #[test]
    fn full_is_canonical() {
        let full = Catalog::full();
        assert_eq!(full.first().map(Card::code).as_deref(), Some("2C"));
        assert_eq!(full.get(1).map(Card::code).as_deref(), Some("2D"));
        assert_eq!(full.get(4).map(Card::code).as_deref(), Some("3C"));
        assert_eq!(full.last().map(Card::code).as_deref(), Some("AS"));
        assert!(full.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn resolve_preserves_order() {
        let cards = Catalog::resolve(&["AS", "KD", "2c"]).unwrap();
        let codes = cards.iter().map(Card::code).collect::<Vec<_>>();
        assert_eq!(codes, vec!["AS", "KD", "2C"]);
    }

    #[test]
    fn resolve_keeps_repeats() {
        let cards = Catalog::resolve(&["AS", "AS"]).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0], cards[1]);
    }

    #[test]
    fn resolve_empty() {
        assert!(Catalog::resolve::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn resolve_rejects_unknown() {
        let names = vec![String::from("AS"), String::from("XX"), String::from("YY")];
        assert_eq!(Catalog::resolve(&names), Err(InvalidCard("XX".into())));
    }
}
