/// Source of candidate deck identifiers.
///
/// The repository checks every candidate against its stored decks, so a
/// mint only has to produce values, not guarantee uniqueness.
pub trait Mint: Send + Sync {
    fn mint(&self) -> uuid::Uuid;
}

/// 128-bit random identifiers (UUID v4).
#[derive(Debug, Default, Clone, Copy)]
pub struct Random;

impl Mint for Random {
    fn mint(&self) -> uuid::Uuid {
        uuid::Uuid::new_v4()
    }
}
