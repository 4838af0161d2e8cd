//! Cards and the deck they are dealt from.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank};
pub use deck::Deck;
