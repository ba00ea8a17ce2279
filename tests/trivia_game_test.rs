//! End-to-end playthrough tests for the trivia engine.
//!
//! Covers the full answer/advance/restart lifecycle with a seeded RNG so
//! every run is reproducible.

use ecolexico::constants::{POINTS_PER_CORRECT, STARTING_LIVES};
use ecolexico::trivia::{advance, begin, restart, submit_answer, GamePhase, TriviaGame};
use ecolexico::words::{WordEntry, WordId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn word(id: WordId) -> WordEntry {
    WordEntry {
        id,
        term: format!("palabra-{}", id),
        meaning: format!("significado {}", id),
        audio_url: None,
        region_id: 1,
    }
}

fn catalog(n: WordId) -> Vec<WordEntry> {
    (1..=n).map(word).collect()
}

fn new_game(n: WordId, seed: u64) -> (TriviaGame, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = TriviaGame::new(catalog(n)).unwrap();
    begin(&mut game, &mut rng);
    (game, rng)
}

/// Answer the current round correctly and run the deferred advance.
fn answer_correct(game: &mut TriviaGame, rng: &mut ChaCha8Rng) -> WordId {
    let target = game.current_round.as_ref().unwrap().target.id;
    submit_answer(game, target);
    advance(game, game.epoch, rng);
    target
}

/// Answer the current round wrong and run the deferred advance.
fn answer_wrong(game: &mut TriviaGame, rng: &mut ChaCha8Rng) -> WordId {
    let round = game.current_round.as_ref().unwrap();
    let target = round.target.id;
    let wrong = round
        .options
        .iter()
        .find(|o| o.id != target)
        .expect("round must contain a distractor")
        .id;
    submit_answer(game, wrong);
    advance(game, game.epoch, rng);
    target
}

#[test]
fn first_correct_answer_on_four_word_catalog() {
    // Scenario: 4 words, answer the first round correctly.
    let (mut game, mut rng) = new_game(4, 1);

    let asked = answer_correct(&mut game, &mut rng);

    assert_eq!(game.score, POINTS_PER_CORRECT);
    assert_eq!(game.lives, STARTING_LIVES);
    assert_eq!(game.words_used(), 1);
    assert_eq!(game.phase, GamePhase::Playing);

    // The next round targets one of the remaining words.
    let next_target = game.current_round.as_ref().unwrap().target.id;
    assert_ne!(next_target, asked);
}

#[test]
fn three_wrong_answers_end_the_game() {
    // Scenario: 4 words, three consecutive misses.
    let (mut game, mut rng) = new_game(4, 2);

    for _ in 0..3 {
        answer_wrong(&mut game, &mut rng);
    }

    assert_eq!(game.lives, 0);
    assert_eq!(game.phase, GamePhase::GameOver);
    assert_eq!(game.score, 0);
    assert!(game.current_round.is_none());
}

#[test]
fn perfect_playthrough_wins() {
    // Scenario: 4 words, all answered correctly.
    let (mut game, mut rng) = new_game(4, 3);

    for _ in 0..4 {
        answer_correct(&mut game, &mut rng);
    }

    assert_eq!(game.phase, GamePhase::Win);
    assert_eq!(game.score, 4 * POINTS_PER_CORRECT);
    assert_eq!(game.words_used(), 4);
    assert!(game.current_round.is_none());
}

#[test]
fn catalog_of_three_words_is_rejected() {
    // Scenario: start() with too few words.
    let err = TriviaGame::new(catalog(3)).unwrap_err();
    assert_eq!(err.have, 3);
    assert_eq!(err.need, 4);
}

#[test]
fn double_click_scores_only_once() {
    // Scenario: two submissions for the same round in immediate succession.
    let (mut game, mut rng) = new_game(4, 4);

    let round = game.current_round.as_ref().unwrap();
    let target = round.target.id;
    let wrong = round.options.iter().find(|o| o.id != target).unwrap().id;

    submit_answer(&mut game, target);
    submit_answer(&mut game, target);
    submit_answer(&mut game, wrong);

    assert_eq!(game.score, POINTS_PER_CORRECT);
    assert_eq!(game.lives, STARTING_LIVES);

    let epoch = game.epoch;
    advance(&mut game, epoch, &mut rng);
    assert_eq!(game.words_used(), 1);
}

#[test]
fn no_target_repeats_within_a_playthrough() {
    let (mut game, mut rng) = new_game(8, 5);

    let mut asked = HashSet::new();
    while game.phase == GamePhase::Playing {
        let target = answer_correct(&mut game, &mut rng);
        assert!(asked.insert(target), "target {} asked twice", target);
    }

    assert_eq!(game.phase, GamePhase::Win);
    assert_eq!(asked.len(), 8);
}

#[test]
fn mixed_answers_track_score_and_lives_exactly() {
    let (mut game, mut rng) = new_game(8, 6);

    answer_correct(&mut game, &mut rng);
    answer_wrong(&mut game, &mut rng);
    answer_correct(&mut game, &mut rng);
    answer_wrong(&mut game, &mut rng);

    assert_eq!(game.score, 2 * POINTS_PER_CORRECT);
    assert_eq!(game.lives, STARTING_LIVES - 2);
    assert_eq!(game.words_used(), 4);
    assert_eq!(game.phase, GamePhase::Playing);
}

#[test]
fn exhausting_catalog_with_lives_left_is_a_win() {
    // One miss, then run the table: Win, not GameOver.
    let (mut game, mut rng) = new_game(4, 7);

    answer_wrong(&mut game, &mut rng);
    for _ in 0..3 {
        answer_correct(&mut game, &mut rng);
    }

    assert_eq!(game.phase, GamePhase::Win);
    assert_eq!(game.lives, STARTING_LIVES - 1);
    assert_eq!(game.score, 3 * POINTS_PER_CORRECT);
}

#[test]
fn restart_from_game_over_deals_a_fresh_round() {
    let (mut game, mut rng) = new_game(4, 8);

    for _ in 0..3 {
        answer_wrong(&mut game, &mut rng);
    }
    assert_eq!(game.phase, GamePhase::GameOver);

    restart(&mut game, &mut rng);

    assert_eq!(game.score, 0);
    assert_eq!(game.lives, STARTING_LIVES);
    assert_eq!(game.words_used(), 0);
    assert_eq!(game.phase, GamePhase::Playing);
    assert!(game.current_round.is_some());
}

#[test]
fn restart_from_win_deals_a_fresh_round() {
    let (mut game, mut rng) = new_game(4, 9);

    for _ in 0..4 {
        answer_correct(&mut game, &mut rng);
    }
    assert_eq!(game.phase, GamePhase::Win);

    restart(&mut game, &mut rng);

    assert_eq!(game.phase, GamePhase::Playing);
    assert!(game.current_round.is_some());
    assert_eq!(game.words_used(), 0);
}

#[test]
fn stale_timer_cannot_touch_a_restarted_session() {
    let (mut game, mut rng) = new_game(4, 10);

    // Resolve a round but do not advance - the timer is "in flight".
    let target = game.current_round.as_ref().unwrap().target.id;
    submit_answer(&mut game, target);
    let stale_epoch = game.epoch;
    assert_eq!(game.phase, GamePhase::RoundResolved);

    restart(&mut game, &mut rng);
    let snapshot_before = game.snapshot();

    // The in-flight timer fires against the old epoch.
    advance(&mut game, stale_epoch, &mut rng);

    assert_eq!(game.snapshot(), snapshot_before);
    assert_eq!(game.phase, GamePhase::Playing);
}

#[test]
fn snapshot_reports_progress_fraction() {
    let (mut game, mut rng) = new_game(4, 11);

    assert_eq!(game.snapshot().progress, 0.0);

    answer_correct(&mut game, &mut rng);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.words_used, 1);
    assert_eq!(snapshot.words_total, 4);
    assert!((snapshot.progress - 0.25).abs() < f64::EPSILON);
}

#[test]
fn terminal_phases_carry_no_round() {
    let (mut game, mut rng) = new_game(4, 12);

    for _ in 0..3 {
        answer_wrong(&mut game, &mut rng);
    }
    assert!(game.current_round.is_none());
    assert!(game.resolved.is_none());

    // Answers in a terminal phase are no-ops.
    submit_answer(&mut game, 1);
    assert_eq!(game.phase, GamePhase::GameOver);
    assert_eq!(game.score, 0);
}
