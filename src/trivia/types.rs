//! Trivia engine data structures.
//!
//! All playthrough state lives in [`TriviaGame`], a UI-independent aggregate
//! mutated only by the transition functions in [`super::logic`].

use crate::constants::{MIN_CATALOG_SIZE, STARTING_LIVES};
use crate::words::{WordEntry, WordId};
use std::collections::HashSet;
use std::fmt;

/// Lifecycle of one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Session created, first round not dealt yet.
    Loading,
    /// A round is on screen awaiting an answer.
    Playing,
    /// Answer applied; feedback shows until the scheduled advance fires.
    RoundResolved,
    /// Out of lives.
    GameOver,
    /// Every catalog word was asked with lives to spare.
    Win,
}

/// One multiple-choice question: a target word plus shuffled options.
#[derive(Debug, Clone)]
pub struct Round {
    pub target: WordEntry,
    /// Exactly one option carries the target's id; all option ids are distinct.
    pub options: Vec<WordEntry>,
}

/// A round the player just answered, kept around for feedback rendering.
#[derive(Debug, Clone)]
pub struct ResolvedRound {
    pub round: Round,
    pub selected: WordId,
    pub correct: bool,
}

/// Returned by [`TriviaGame::new`] when the catalog cannot fill a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientWords {
    pub have: usize,
    pub need: usize,
}

impl fmt::Display for InsufficientWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "catalog has {} words, need at least {} to play",
            self.have, self.need
        )
    }
}

impl std::error::Error for InsufficientWords {}

/// Read-only view of the session for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    pub words_used: usize,
    pub words_total: usize,
    /// `words_used / words_total`, in `[0, 1]`.
    pub progress: f64,
}

/// One full playthrough of the trivia game.
#[derive(Debug, Clone)]
pub struct TriviaGame {
    pub(crate) catalog: Vec<WordEntry>,
    /// Ids already asked this playthrough. Grows monotonically until restart.
    pub(crate) used_ids: HashSet<WordId>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
    pub current_round: Option<Round>,
    pub resolved: Option<ResolvedRound>,
    /// Bumped by `begin`/`restart`. Deferred advances carry the epoch they
    /// were scheduled under and bail out on mismatch.
    pub epoch: u64,
}

impl TriviaGame {
    /// Create a session over `catalog`. Fails when a full round of distinct
    /// options is impossible.
    pub fn new(catalog: Vec<WordEntry>) -> Result<Self, InsufficientWords> {
        if catalog.len() < MIN_CATALOG_SIZE {
            return Err(InsufficientWords {
                have: catalog.len(),
                need: MIN_CATALOG_SIZE,
            });
        }

        Ok(Self {
            catalog,
            used_ids: HashSet::new(),
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::Loading,
            current_round: None,
            resolved: None,
            epoch: 0,
        })
    }

    pub fn catalog(&self) -> &[WordEntry] {
        &self.catalog
    }

    /// Words not yet asked this playthrough. Recomputed on demand so it
    /// always reflects the latest marks.
    pub fn available_words(&self) -> Vec<&WordEntry> {
        self.catalog
            .iter()
            .filter(|w| !self.used_ids.contains(&w.id))
            .collect()
    }

    /// Record that `id` was asked. Idempotent.
    pub fn mark_used(&mut self, id: WordId) {
        self.used_ids.insert(id);
    }

    pub fn is_exhausted(&self) -> bool {
        self.available_words().is_empty()
    }

    pub fn words_used(&self) -> usize {
        self.used_ids.len()
    }

    /// True in both terminal phases.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::Win)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            score: self.score,
            lives: self.lives,
            phase: self.phase,
            words_used: self.used_ids.len(),
            words_total: self.catalog.len(),
            progress: self.used_ids.len() as f64 / self.catalog.len() as f64,
        }
    }
}
