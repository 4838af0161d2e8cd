//! The board: every card in the game, in a fixed order.
//!
//! ## Generation
//!
//! Ranks `1..=rank_count` are generated in order, each one twice, and ids are
//! handed out sequentially as cards are generated. The whole sequence is then
//! shuffled once. After that the order never changes; only each card's
//! `opener` is written.
//!
//! ## Storage
//!
//! Cards live in an `im::Vector` so a view of the board can be cloned in O(1)
//! after every move. A hash index maps `CardId` to board position.

use im::Vector;
use rand::Rng;
use rustc_hash::FxHashMap;

use super::card::{Card, CardId, Rank};
use crate::core::{fisher_yates, PlayerId};

/// All cards of a game.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vector<Card>,
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build an unshuffled deck: ids `0..2n`, ranks `1, 1, 2, 2, ...`.
    ///
    /// ```
    /// use concentration::cards::{CardId, Deck, Rank};
    ///
    /// let deck = Deck::ordered(2);
    /// let ranks: Vec<_> = deck.iter().map(|c| c.rank.value()).collect();
    /// assert_eq!(ranks, vec![1, 1, 2, 2]);
    /// assert_eq!(deck.get(CardId::new(3)).map(|c| c.rank), Some(Rank::new(2)));
    /// ```
    #[must_use]
    pub fn ordered(rank_count: usize) -> Self {
        Self::from_cards(Self::generate(rank_count))
    }

    /// Build a deck and shuffle it once with the given source.
    pub fn shuffled<R: Rng + ?Sized>(rank_count: usize, rng: &mut R) -> Self {
        let mut cards = Self::generate(rank_count);
        fisher_yates(&mut cards, rng);
        Self::from_cards(cards)
    }

    fn generate(rank_count: usize) -> Vec<Card> {
        (1..=rank_count as u32)
            .flat_map(|rank| [rank, rank])
            .enumerate()
            .map(|(id, rank)| Card::new(CardId::new(id as u32), Rank::new(rank)))
            .collect()
    }

    fn from_cards(cards: Vec<Card>) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();

        Self {
            cards: Vector::from(cards),
            positions,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for a deck with no cards (never produced by a valid config).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Does the deck contain this id?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Set who holds a card face-up. Returns false for an unknown id.
    pub(crate) fn set_opener(&mut self, id: CardId, opener: Option<PlayerId>) -> bool {
        let Some(&pos) = self.positions.get(&id) else {
            return false;
        };
        match self.cards.get_mut(pos) {
            Some(card) => {
                card.opener = opener;
                true
            }
            None => false,
        }
    }

    /// Count of cards currently held face-up by `player`.
    #[must_use]
    pub fn opened_by(&self, player: PlayerId) -> usize {
        self.iter().filter(|c| c.opener == Some(player)).count()
    }

    /// Count of face-down cards.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.iter().filter(|c| !c.is_face_up()).count()
    }

    /// True when every card is face-up.
    #[must_use]
    pub fn all_face_up(&self) -> bool {
        self.iter().all(Card::is_face_up)
    }

    /// How many cards carry each rank.
    #[must_use]
    pub fn rank_counts(&self) -> FxHashMap<Rank, usize> {
        let mut counts = FxHashMap::default();
        for card in self.iter() {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }
}
