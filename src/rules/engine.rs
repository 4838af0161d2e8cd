//! The turn/match state machine.
//!
//! `GameEngine` owns the deck, the pending pair, the scores and, once the
//! game is over, the frozen standings. Callers drive it one call at a time:
//!
//! - `select_card` flips a face-down card for the current player
//! - `advance_turn` resolves a finished pair (or finalizes the game)
//!
//! ## Turn flow
//!
//! A match leaves both cards face-up with the current player, who keeps the
//! turn. A mismatch flips both back and passes play to the next seat.
//!
//! Completion is only *detected* by `select_card` (every card face-up); the
//! standings are captured at the start of the following `advance_turn`, after
//! which nothing changes.
//!
//! ## Example
//!
//! ```
//! use concentration::{Advance, GameEngineBuilder, Pick, PlayerId};
//!
//! let mut game = GameEngineBuilder::new()
//!     .player_count(2)
//!     .rank_count(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let ids: Vec<_> = game.cards().iter().map(|c| c.id).collect();
//! assert_eq!(game.select_card(ids[0]).unwrap(), Pick::First);
//! assert_eq!(game.select_card(ids[1]).unwrap(), Pick::Second { matched: true });
//! assert!(game.is_game_complete());
//!
//! assert_eq!(game.advance_turn(), Advance::Finished);
//! let result = game.result().unwrap();
//! assert_eq!(result.winners(), vec![PlayerId::new(0)]);
//! ```

use im::Vector;
use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::result::GameResult;
use super::score::ScoreBoard;
use super::turn::TurnState;
use crate::cards::{Card, CardId, Deck};
use crate::core::{GameError, GameRng, MatchConfig, PlayerId, Result};

/// What `select_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pick {
    /// Nothing changed: card already face-up, turn resolved, or game over.
    Ignored,
    /// The card became the first pick of the turn.
    First,
    /// The card completed the pair.
    Second { matched: bool },
}

/// What `advance_turn` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Nothing changed: turn unresolved or game already finalized.
    Ignored,
    /// The pair matched; the same player goes again.
    Kept,
    /// The pair missed and was flipped back; `next` is now playing.
    Passed { next: PlayerId },
    /// Every card was matched; standings are now frozen.
    Finished,
}

/// Snapshot of everything a renderer needs.
///
/// Cheap to clone: the card list shares structure with the engine's deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub cards: Vector<Card>,
    pub current_player: PlayerId,
    pub first_pick: Option<CardId>,
    pub second_pick: Option<CardId>,
    /// Match hint, present only while the turn is resolved.
    pub matched: Option<bool>,
    pub turn_resolved: bool,
    pub game_complete: bool,
    pub finished: bool,
}

/// Builder for creating a `GameEngine`.
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    config: MatchConfig,
    seed: Option<u64>,
}

impl GameEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn rank_count(mut self, count: usize) -> Self {
        self.config.rank_count = count;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the shuffle seed. Without one, the deck is shuffled from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and deal a shuffled deck.
    pub fn build(self) -> Result<GameEngine> {
        self.config.validate()?;

        let mut rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::shuffled(self.config.rank_count, &mut rng);

        Ok(GameEngine::deal(self.config, deck, rng))
    }
}

/// A single game of concentration.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: MatchConfig,
    deck: Deck,
    turn: TurnState,
    current_player: PlayerId,
    scores: ScoreBoard,
    result: Option<GameResult>,
    events: Vec<GameEvent>,
    rng: GameRng,
}

impl GameEngine {
    /// Start a game with an entropy-seeded shuffle.
    pub fn create(player_count: usize, rank_count: usize) -> Result<Self> {
        GameEngineBuilder::new()
            .player_count(player_count)
            .rank_count(rank_count)
            .build()
    }

    /// Start a game shuffled by a caller-supplied random source.
    ///
    /// The engine keeps its own generator for `restart`, seeded from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: MatchConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let deck = Deck::shuffled(config.rank_count, rng);
        let own = GameRng::new(rng.gen());

        Ok(Self::deal(config, deck, own))
    }

    fn deal(config: MatchConfig, deck: Deck, rng: GameRng) -> Self {
        debug!(
            "dealt {} cards for {} players (seed {})",
            deck.len(),
            config.player_count,
            rng.seed()
        );

        Self {
            config,
            deck,
            turn: TurnState::new(),
            current_player: PlayerId::new(0),
            scores: ScoreBoard::new(config.player_count),
            result: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Throw this game away and deal a fresh one with the same configuration.
    pub fn restart(&mut self) {
        let deck = Deck::shuffled(self.config.rank_count, &mut self.rng);
        let rng = self.rng.clone();
        *self = Self::deal(self.config, deck, rng);
    }

    // === Commands ===

    /// Flip a face-down card for the current player.
    ///
    /// Unknown ids are rejected. Selecting a face-up card, selecting while
    /// the turn is resolved, or selecting after the game is finalized
    /// changes nothing and returns `Pick::Ignored`.
    pub fn select_card(&mut self, id: CardId) -> Result<Pick> {
        let card = self
            .deck
            .get(id)
            .ok_or(GameError::InvalidCardReference(id))?;
        let (rank, face_up) = (card.rank, card.is_face_up());

        if self.result.is_some() || face_up || self.turn.is_resolved() {
            trace!("ignored pick of card {}", id);
            return Ok(Pick::Ignored);
        }

        let player = self.current_player;
        self.deck.set_opener(id, Some(player));
        self.events.push(GameEvent::CardRevealed { card: id, rank, player });
        trace!("{} flipped card {} (rank {})", player, id, rank);

        let Some(first) = self.turn.first_pick() else {
            self.turn.open_first(id);
            return Ok(Pick::First);
        };

        let matched = self.deck.get(first).map(|c| c.rank) == Some(rank);
        self.turn.open_second(id, matched);
        self.scores.record_try(player);

        let cards = [first, id];
        self.events.push(if matched {
            GameEvent::PairMatched { player, rank, cards }
        } else {
            GameEvent::PairMissed { player, cards }
        });
        debug!(
            "{} {} cards {} and {}",
            player,
            if matched { "matched" } else { "missed" },
            first,
            id
        );

        Ok(Pick::Second { matched })
    }

    /// Resolve the pending pair, or finalize a completed game.
    ///
    /// Completion is checked first: if every card is face-up the standings
    /// are captured and the game freezes. Otherwise an unresolved turn is
    /// left alone; a resolved one is cleared, flipping a missed pair back
    /// and passing play to the next seat.
    pub fn advance_turn(&mut self) -> Advance {
        if self.result.is_some() {
            return Advance::Ignored;
        }

        if self.is_game_complete() {
            let result = self.scores.standings(&self.deck);
            let winners = result.winners();
            debug!("game finished, winners: {:?}", winners);

            self.events.push(GameEvent::GameFinished { winners });
            self.result = Some(result);
            return Advance::Finished;
        }

        let Some((first, second)) = self.turn.pair() else {
            trace!("ignored advance on unresolved turn");
            return Advance::Ignored;
        };

        let matched = self.turn.matched() == Some(true);
        self.turn.clear();

        if matched {
            return Advance::Kept;
        }

        self.deck.set_opener(first, None);
        self.deck.set_opener(second, None);

        let from = self.current_player;
        let next = from.next(self.config.player_count);
        self.current_player = next;
        self.events.push(GameEvent::TurnPassed { from, to: next });
        debug!("turn passed from {} to {}", from, next);

        Advance::Passed { next }
    }

    /// Take every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Queries ===

    /// Have both picks of this turn been made?
    #[must_use]
    pub fn is_turn_resolved(&self) -> bool {
        self.turn.is_resolved()
    }

    /// Is every card face-up?
    ///
    /// Becomes true as soon as the last pair is matched, before the
    /// `advance_turn` that finalizes the standings.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.deck.all_face_up()
    }

    /// Has `advance_turn` frozen the standings?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Frozen standings, available once the game is finalized.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Match hint for the resolved turn.
    #[must_use]
    pub fn last_match(&self) -> Option<bool> {
        self.turn.matched()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        self.deck.cards()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Ids of cards that can still be flipped.
    #[must_use]
    pub fn face_down_cards(&self) -> Vec<CardId> {
        self.deck
            .iter()
            .filter(|c| !c.is_face_up())
            .map(|c| c.id)
            .collect()
    }

    #[must_use]
    pub fn tries_taken(&self, player: PlayerId) -> u32 {
        self.scores.tries_taken(player)
    }

    /// Cards currently face-up with `player`.
    #[must_use]
    pub fn matched_count(&self, player: PlayerId) -> usize {
        self.scores.matched_count(&self.deck, player)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            cards: self.deck.cards().clone(),
            current_player: self.current_player,
            first_pick: self.turn.first_pick(),
            second_pick: self.turn.second_pick(),
            matched: self.turn.matched(),
            turn_resolved: self.turn.is_resolved(),
            game_complete: self.is_game_complete(),
            finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn game(player_count: usize, rank_count: usize) -> GameEngine {
        GameEngineBuilder::new()
            .player_count(player_count)
            .rank_count(rank_count)
            .seed(42)
            .build()
            .unwrap()
    }

    /// Ids of the two cards carrying `rank`.
    fn pair_of(game: &GameEngine, rank: u32) -> (CardId, CardId) {
        let ids: Vec<_> = game
            .cards()
            .iter()
            .filter(|c| c.rank == Rank::new(rank))
            .map(|c| c.id)
            .collect();
        (ids[0], ids[1])
    }

    #[test]
    fn test_new_game() {
        let game = game(3, 12);

        assert_eq!(game.cards().len(), 24);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.player_count(), 3);
        assert!(!game.is_turn_resolved());
        assert!(!game.is_game_complete());
        assert!(game.result().is_none());
        for player in PlayerId::all(3) {
            assert_eq!(game.tries_taken(player), 0);
            assert_eq!(game.matched_count(player), 0);
        }
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            GameEngine::create(0, 12).unwrap_err(),
            GameError::InvalidPlayerCount(0)
        );
        assert_eq!(
            GameEngine::create(2, 0).unwrap_err(),
            GameError::InvalidRankCount(0)
        );
    }

    #[test]
    fn test_unknown_card_rejected() {
        let mut game = game(2, 2);
        let before = game.view();

        assert_eq!(
            game.select_card(CardId::new(4)),
            Err(GameError::InvalidCardReference(CardId::new(4)))
        );
        assert_eq!(game.view(), before);
    }

    #[test]
    fn test_first_pick() {
        let mut game = game(2, 3);
        let (a, _) = pair_of(&game, 1);

        assert_eq!(game.select_card(a).unwrap(), Pick::First);
        assert_eq!(game.card(a).unwrap().opener, Some(PlayerId::new(0)));
        assert_eq!(game.turn().first_pick(), Some(a));
        assert!(!game.is_turn_resolved());
        assert_eq!(game.last_match(), None);
        assert_eq!(game.tries_taken(PlayerId::new(0)), 0);
    }

    #[test]
    fn test_match_keeps_turn() {
        let mut game = game(2, 3);
        let (a, b) = pair_of(&game, 2);

        game.select_card(a).unwrap();
        assert_eq!(game.select_card(b).unwrap(), Pick::Second { matched: true });
        assert_eq!(game.last_match(), Some(true));
        assert_eq!(game.tries_taken(PlayerId::new(0)), 1);

        assert_eq!(game.advance_turn(), Advance::Kept);
        assert_eq!(game.current_player(), PlayerId::new(0));
        assert!(game.card(a).unwrap().is_face_up());
        assert!(game.card(b).unwrap().is_face_up());
        assert_eq!(game.matched_count(PlayerId::new(0)), 2);
        assert!(!game.is_turn_resolved());
    }

    #[test]
    fn test_mismatch_passes_turn() {
        let mut game = game(2, 3);
        let (a, _) = pair_of(&game, 1);
        let (c, _) = pair_of(&game, 3);

        game.select_card(a).unwrap();
        assert_eq!(game.select_card(c).unwrap(), Pick::Second { matched: false });
        assert_eq!(game.last_match(), Some(false));

        assert_eq!(
            game.advance_turn(),
            Advance::Passed { next: PlayerId::new(1) }
        );
        assert_eq!(game.current_player(), PlayerId::new(1));
        assert!(!game.card(a).unwrap().is_face_up());
        assert!(!game.card(c).unwrap().is_face_up());
        assert_eq!(game.tries_taken(PlayerId::new(0)), 1);
        assert_eq!(game.tries_taken(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_single_player_mismatch_stays_with_player() {
        let mut game = game(1, 2);
        let (a, _) = pair_of(&game, 1);
        let (c, _) = pair_of(&game, 2);

        game.select_card(a).unwrap();
        game.select_card(c).unwrap();

        assert_eq!(
            game.advance_turn(),
            Advance::Passed { next: PlayerId::new(0) }
        );
    }

    #[test]
    fn test_third_pick_ignored_while_resolved() {
        let mut game = game(2, 3);
        let (a, _) = pair_of(&game, 1);
        let (c, _) = pair_of(&game, 2);
        let (e, _) = pair_of(&game, 3);

        game.select_card(a).unwrap();
        game.select_card(c).unwrap();
        let before = game.view();

        assert_eq!(game.select_card(e).unwrap(), Pick::Ignored);
        assert_eq!(game.view(), before);
        assert_eq!(game.tries_taken(PlayerId::new(0)), 1);
    }

    #[test]
    fn test_reselecting_face_up_card_ignored() {
        let mut game = game(2, 3);
        let (a, _) = pair_of(&game, 1);

        game.select_card(a).unwrap();
        let before = game.view();

        assert_eq!(game.select_card(a).unwrap(), Pick::Ignored);
        assert_eq!(game.view(), before);
    }

    #[test]
    fn test_advance_on_unresolved_turn_ignored() {
        let mut game = game(2, 3);
        assert_eq!(game.advance_turn(), Advance::Ignored);

        let (a, _) = pair_of(&game, 1);
        game.select_card(a).unwrap();
        let before = game.view();

        assert_eq!(game.advance_turn(), Advance::Ignored);
        assert_eq!(game.view(), before);
    }

    #[test]
    fn test_completion_detected_before_advance() {
        let mut game = game(2, 1);
        let (a, b) = pair_of(&game, 1);

        game.select_card(a).unwrap();
        game.select_card(b).unwrap();

        assert!(game.is_game_complete());
        assert!(game.result().is_none());

        assert_eq!(game.advance_turn(), Advance::Finished);
        assert!(game.is_finished());
        assert!(game.result().is_some());
    }

    #[test]
    fn test_frozen_after_finish() {
        let mut game = game(2, 1);
        let (a, b) = pair_of(&game, 1);
        game.select_card(a).unwrap();
        game.select_card(b).unwrap();
        game.advance_turn();

        let before = game.view();
        let result = game.result().cloned();

        assert_eq!(game.select_card(a).unwrap(), Pick::Ignored);
        assert_eq!(game.advance_turn(), Advance::Ignored);
        assert_eq!(game.view(), before);
        assert_eq!(game.result().cloned(), result);
    }

    #[test]
    fn test_events() {
        let mut game = game(2, 2);
        let (a, b) = pair_of(&game, 1);
        let (c, d) = pair_of(&game, 2);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        game.select_card(a).unwrap();
        game.select_card(c).unwrap();
        game.advance_turn();

        assert_eq!(
            game.drain_events(),
            vec![
                GameEvent::CardRevealed { card: a, rank: Rank::new(1), player: p0 },
                GameEvent::CardRevealed { card: c, rank: Rank::new(2), player: p0 },
                GameEvent::PairMissed { player: p0, cards: [a, c] },
                GameEvent::TurnPassed { from: p0, to: p1 },
            ]
        );
        assert!(game.drain_events().is_empty());

        game.select_card(a).unwrap();
        game.select_card(b).unwrap();
        game.advance_turn();
        game.select_card(c).unwrap();
        game.select_card(d).unwrap();
        game.advance_turn();

        let events = game.drain_events();
        assert!(events.contains(&GameEvent::PairMatched {
            player: p1,
            rank: Rank::new(1),
            cards: [a, b],
        }));
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameFinished { winners: vec![p1] })
        );
    }

    #[test]
    fn test_restart() {
        let mut game = game(3, 2);
        let (a, b) = pair_of(&game, 1);
        game.select_card(a).unwrap();
        game.select_card(b).unwrap();

        game.restart();

        assert_eq!(game.player_count(), 3);
        assert_eq!(game.cards().len(), 4);
        assert!(game.cards().iter().all(|c| !c.is_face_up()));
        assert!(!game.is_turn_resolved());
        assert_eq!(game.tries_taken(PlayerId::new(0)), 0);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_deck() {
        let order = |g: &GameEngine| g.cards().iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(order(&game(2, 12)), order(&game(2, 12)));
    }

    #[test]
    fn test_with_injected_rng() {
        let config = MatchConfig::new(2, 6);
        let a = GameEngine::with_rng(config, &mut GameRng::new(9)).unwrap();
        let b = GameEngine::with_rng(config, &mut GameRng::new(9)).unwrap();

        let order = |g: &GameEngine| g.cards().iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(order(&a), order(&b));
        assert_eq!(a.face_down_cards().len(), 12);

        assert_eq!(
            GameEngine::with_rng(MatchConfig::new(0, 6), &mut GameRng::new(9)).unwrap_err(),
            GameError::InvalidPlayerCount(0)
        );
    }
}
