//! Trivia engine transition functions.
//!
//! Round generation is pure; committing its side effects (marking the target
//! used) happens in the answer path. Score, lives, and the used-set mutate
//! synchronously inside [`submit_answer`] - only the *next* round is deferred
//! behind the feedback delay, via [`advance`].

use super::types::{GamePhase, ResolvedRound, Round, TriviaGame};
use crate::constants::{DISTRACTORS_PER_ROUND, POINTS_PER_CORRECT, STARTING_LIVES};
use crate::words::{WordEntry, WordId};
use rand::Rng;
use std::collections::HashSet;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Generate one round: an unused target plus up to three distinct
/// distractors, shuffled together.
///
/// Returns `None` when every catalog word has already been asked. That is
/// the win signal, not an error.
pub fn generate_round<R: Rng>(
    catalog: &[WordEntry],
    used_ids: &HashSet<WordId>,
    rng: &mut R,
) -> Option<Round> {
    let available: Vec<&WordEntry> = catalog
        .iter()
        .filter(|w| !used_ids.contains(&w.id))
        .collect();
    if available.is_empty() {
        return None;
    }

    let target = available[rng.gen_range(0..available.len())].clone();

    // Distractors may repeat across rounds; only targets are one-shot.
    let candidates: Vec<&WordEntry> = catalog.iter().filter(|w| w.id != target.id).collect();

    // Rejection-sample distinct distractors. Sessions refuse catalogs smaller
    // than a full round, so the cap below only matters defensively: a short
    // candidate pool yields a degraded round with fewer options.
    let wanted = DISTRACTORS_PER_ROUND.min(candidates.len());
    let mut distractors: Vec<WordEntry> = Vec::with_capacity(wanted);
    while distractors.len() < wanted {
        let pick = candidates[rng.gen_range(0..candidates.len())];
        if distractors.iter().all(|d| d.id != pick.id) {
            distractors.push(pick.clone());
        }
    }

    let mut options = Vec::with_capacity(wanted + 1);
    options.push(target.clone());
    options.extend(distractors);
    shuffle(&mut options, rng);

    let round = Round { target, options };
    debug_assert!(
        round_is_well_formed(&round),
        "generated a round with duplicate options or a missing target"
    );
    Some(round)
}

/// Round shape invariant: all option ids distinct, exactly one matches the
/// target. A violation is an implementation bug, hence `debug_assert!` at the
/// generation site.
fn round_is_well_formed(round: &Round) -> bool {
    let mut seen = HashSet::new();
    if !round.options.iter().all(|o| seen.insert(o.id)) {
        return false;
    }
    round
        .options
        .iter()
        .filter(|o| o.id == round.target.id)
        .count()
        == 1
}

/// Transition `Loading -> Playing` and deal the first round. No-op outside
/// `Loading`.
pub fn begin<R: Rng>(game: &mut TriviaGame, rng: &mut R) {
    if game.phase != GamePhase::Loading {
        return;
    }
    game.epoch += 1;
    game.current_round = generate_round(&game.catalog, &game.used_ids, rng);
    game.phase = GamePhase::Playing;
}

/// Apply an answer to the round on screen.
///
/// Ignored unless the game is in `Playing` with a round present - repeated
/// submissions for an already-resolved round are no-ops, so a double-click
/// can never score or cost a life twice.
pub fn submit_answer(game: &mut TriviaGame, selected: WordId) {
    if game.phase != GamePhase::Playing {
        return;
    }
    let Some(round) = game.current_round.take() else {
        return;
    };

    let correct = selected == round.target.id;
    if correct {
        game.score += POINTS_PER_CORRECT;
    } else {
        game.lives = game.lives.saturating_sub(1);
    }
    // Asked is asked: even a missed word is never re-asked this playthrough.
    game.mark_used(round.target.id);

    game.resolved = Some(ResolvedRound {
        round,
        selected,
        correct,
    });
    game.phase = GamePhase::RoundResolved;
}

/// The deferred continuation behind the feedback delay. Settles the phase:
/// out of lives means `GameOver`, an exhausted catalog means `Win`, otherwise
/// the next round is dealt.
///
/// `epoch` is the value captured when the delay was scheduled. A mismatch
/// means the session was restarted in the meantime and this timer is stale.
pub fn advance<R: Rng>(game: &mut TriviaGame, epoch: u64, rng: &mut R) {
    if epoch != game.epoch || game.phase != GamePhase::RoundResolved {
        return;
    }
    game.resolved = None;

    if game.lives == 0 {
        game.phase = GamePhase::GameOver;
        return;
    }

    match generate_round(&game.catalog, &game.used_ids, rng) {
        Some(round) => {
            game.current_round = Some(round);
            game.phase = GamePhase::Playing;
        }
        None => game.phase = GamePhase::Win,
    }
}

/// Reset to a fresh playthrough and deal the first round. Valid from any
/// phase; pending advances scheduled before the restart become no-ops.
pub fn restart<R: Rng>(game: &mut TriviaGame, rng: &mut R) {
    game.score = 0;
    game.lives = STARTING_LIVES;
    game.used_ids.clear();
    game.resolved = None;
    game.epoch += 1;
    game.current_round = generate_round(&game.catalog, &game.used_ids, rng);
    game.phase = GamePhase::Playing;
}
