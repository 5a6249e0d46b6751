use super::error::DeckError;
use odk_cards::Card;
use odk_core::ID;
use odk_core::Unique;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered, mutable stack of cards under a unique identifier.
///
/// The top of the deck is the END of `cards`: the last card of a partial
/// deck's requested names is the first one dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: ID<Deck>,
    cards: Vec<Card>,
    shuffled: bool,
}

impl Deck {
    pub fn new(id: ID<Deck>, cards: Vec<Card>) -> Self {
        Self {
            id,
            cards,
            shuffled: false,
        }
    }
    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
    pub fn shuffled(&self) -> bool {
        self.shuffled
    }
    /// Card that the next draw returns first.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }
    /// Uniformly permutes the remaining cards (Fisher–Yates).
    /// Cards already drawn stay drawn.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.shuffle(rng);
        self.shuffled = true;
    }
    /// Removes `count` cards from the top, returned in the order they came off.
    /// Leaves the deck untouched when fewer than `count` remain.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining,
            });
        }
        Ok(self.cards.drain(remaining - count..).rev().collect())
    }
}

impl Unique for Deck {
    fn id(&self) -> ID<Deck> {
        self.id
    }
}
