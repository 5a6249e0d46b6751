use super::deck::Deck;
use super::error::DeckError;
use super::mint::Mint;
use super::mint::Random;
use odk_cards::Card;
use odk_cards::Catalog;
use odk_core::ID;
use odk_core::MAX_ID_ATTEMPTS;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

/// Live, individually lockable reference to a stored deck.
pub type Handle = Arc<Mutex<Deck>>;

/// Owns every live deck, keyed by identifier.
///
/// The map lock is only held long enough to look up or insert a handle;
/// shuffles and draws lock the one deck they touch, so operations on
/// different decks proceed in parallel.
pub struct Repository<M = Random> {
    mint: M,
    decks: RwLock<HashMap<ID<Deck>, Handle>>,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new(Random)
    }
}

impl<M> Repository<M>
where
    M: Mint,
{
    pub fn new(mint: M) -> Self {
        Self {
            mint,
            decks: RwLock::new(HashMap::new()),
        }
    }
    /// Number of stored decks.
    pub async fn len(&self) -> usize {
        self.decks.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.decks.read().await.is_empty()
    }
}

impl<M> Repository<M>
where
    M: Mint,
{
    /// Builds and stores a new deck.
    ///
    /// No names means the full catalog; otherwise the named cards in the
    /// given order, so the last name ends up on top. Nothing is stored if
    /// any name is invalid or no free identifier turns up.
    pub async fn create<S>(&self, names: &[S], shuffle: bool) -> Result<Deck, DeckError>
    where
        S: AsRef<str> + Sync,
    {
        let cards = match names.is_empty() {
            true => Catalog::full(),
            false => Catalog::resolve(names)?,
        };
        let mut decks = self.decks.write().await;
        let id = self.allocate(&decks)?;
        let mut deck = Deck::new(id, cards);
        if shuffle {
            deck.shuffle(&mut rand::rng());
        }
        decks.insert(id, Arc::new(Mutex::new(deck.clone())));
        log::debug!(
            "[repository] created deck {} ({} cards, shuffled: {})",
            id,
            deck.remaining(),
            deck.shuffled()
        );
        Ok(deck)
    }
    /// Looks up the live deck behind `id`.
    /// Later draws through any other caller are visible through the handle.
    pub async fn get(&self, id: &str) -> Result<Handle, DeckError> {
        let key = ID::<Deck>::try_from(id).map_err(|_| DeckError::InvalidId(id.to_string()))?;
        self.decks
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| DeckError::DeckNotFound(key.to_string()))
    }
    /// Point-in-time copy of the deck behind `id`, cards included.
    pub async fn open(&self, id: &str) -> Result<Deck, DeckError> {
        Ok(self.get(id).await?.lock().await.clone())
    }
    /// Shuffles the remaining cards of the deck behind `id`.
    pub async fn shuffle(&self, id: &str) -> Result<Deck, DeckError> {
        let handle = self.get(id).await?;
        let mut deck = handle.lock().await;
        deck.shuffle(&mut rand::rng());
        log::debug!("[repository] shuffled deck {} ({} cards)", id, deck.remaining());
        Ok(deck.clone())
    }
    /// Deals `count` cards off the top of the deck behind `id`.
    ///
    /// The identifier is checked before the count, so a negative count
    /// against an unknown deck reports the deck.
    pub async fn draw(&self, id: &str, count: i64) -> Result<Vec<Card>, DeckError> {
        let handle = self.get(id).await?;
        let count = usize::try_from(count).map_err(|_| DeckError::InvalidCount(count))?;
        let mut deck = handle.lock().await;
        let drawn = deck.draw(count)?;
        log::debug!(
            "[repository] drew {} from deck {} ({} left)",
            drawn.len(),
            id,
            deck.remaining()
        );
        Ok(drawn)
    }
}

impl<M> Repository<M>
where
    M: Mint,
{
    /// Picks an identifier no stored deck uses, trying at most
    /// MAX_ID_ATTEMPTS candidates. The caller holds the write guard, so
    /// nothing can claim the identifier before it is inserted.
    fn allocate(&self, decks: &HashMap<ID<Deck>, Handle>) -> Result<ID<Deck>, DeckError> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| ID::from(self.mint.mint()))
            .find(|id| !decks.contains_key(id))
            .ok_or(DeckError::IdGenerationFailed {
                attempts: MAX_ID_ATTEMPTS,
            })
    }
}
