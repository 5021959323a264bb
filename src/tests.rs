//! Crate-level tests for `arith_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batch; different seeds → varied batches |
//! | Generator invariants | Count, option sets, operand bounds, pair dedup (scenario A + properties) |
//! | Infeasible requests | Fail fast instead of looping (scenario C) |
//! | Session store | Scenarios B and D, reset idempotence, round trip, score monotonicity |
//! | Full flow | Settings → generation → rounds → results |

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    generate_exercises, generate_with_rng, DifficultyLevel, Exercise, GameSession, GameSettings,
    GenerationError, GenerationRequest, OperandKey, QuizRound, Rating, ResultSummary,
    RoundStatus, SessionPhase, POINTS_PER_CORRECT,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn seeded(count: usize, difficulty: DifficultyLevel, seed: u64) -> Vec<Exercise> {
    generate_exercises(GenerationRequest::new(count, difficulty).with_seed(seed))
        .expect("feasible request")
}

/// Assert every invariant a generated batch must hold.
fn assert_valid_batch(batch: &[Exercise], count: usize, min: u32, max: u32) {
    assert_eq!(batch.len(), count);
    let mut keys = HashSet::new();
    for (i, ex) in batch.iter().enumerate() {
        assert_eq!(ex.id as usize, i + 1, "ids must follow generation order");
        let [a, b] = ex.operands;
        assert!((min..=max).contains(&a) && (min..=max).contains(&b), "operands {a},{b}");
        assert_eq!(ex.correct_answer, a + b);
        let options: BTreeSet<u32> = ex.options.iter().copied().collect();
        assert_eq!(options.len(), 4, "options {:?}", ex.options);
        assert!(options.contains(&ex.correct_answer));
        assert!(options.iter().all(|&o| o > 0 && o <= 2 * max));
        assert!(keys.insert(OperandKey::new(a, b)), "duplicate pair {a}+{b}");
    }
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_batch() {
    for difficulty in DifficultyLevel::ALL {
        let a = seeded(10, difficulty, 12345);
        let b = seeded(10, difficulty, 12345);
        assert_eq!(a, b, "batch mismatch for {difficulty:?}");
    }
}

#[test]
fn different_seeds_produce_varied_batches() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = seeded(5, DifficultyLevel::Medium, seed);
        let b = seeded(5, DifficultyLevel::Medium, seed + 500);
        if a == b {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical batches across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_batch() {
    let batch = generate_exercises(GenerationRequest::new(20, DifficultyLevel::Hard)).unwrap();
    assert_valid_batch(&batch, 20, 1, 50);
}

// ── generator invariants ─────────────────────────────────────────────────────

#[test]
fn ten_easy_exercises_stay_in_range() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generate_with_rng(&mut rng, 10, 1, 10).unwrap();
        assert_valid_batch(&batch, 10, 1, 10);
        for ex in &batch {
            assert!((2..=20).contains(&ex.correct_answer));
            assert_eq!(ex.difficulty, if ex.correct_answer <= 10 { 1 } else { 2 });
            assert_eq!(ex.question, format!("What is {} + {}?", ex.operands[0], ex.operands[1]));
        }
    }
}

#[test]
fn options_order_is_not_fixed() {
    // The correct answer must not always sit in the same slot.
    let batch = seeded(20, DifficultyLevel::Hard, 3);
    let slots: HashSet<usize> = batch
        .iter()
        .filter_map(|ex| ex.options.iter().position(|&o| o == ex.correct_answer))
        .collect();
    assert!(slots.len() > 1, "correct answer always in slot {slots:?}");
}

#[test]
fn every_pair_of_a_small_range_can_be_drawn() {
    let mut rng = StdRng::seed_from_u64(8);
    let batch = generate_with_rng(&mut rng, 55, 1, 10).unwrap();
    assert_valid_batch(&batch, 55, 1, 10);
}

// ── infeasible requests ──────────────────────────────────────────────────────

#[test]
fn thousand_exercises_from_one_to_five_fails_fast() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = generate_with_rng(&mut rng, 1000, 1, 5).unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Infeasible { requested: 1000, available: 15, .. }
    ));
    assert!(err.to_string().contains("only 15 operand pairs"));
}

// ── session store ────────────────────────────────────────────────────────────

#[test]
fn answering_and_advancing_through_three() {
    let batch = seeded(3, DifficultyLevel::Easy, 1);
    let mut session = GameSession::new();
    session.start_game(batch);
    session.answer_question(true);
    session.answer_question(false);
    session.next_exercise().unwrap();
    session.next_exercise().unwrap();

    assert_eq!(session.correct_count(), 1);
    assert_eq!(session.total_points(), 10);
    assert_eq!(session.current_index(), 2);
    assert!(session.is_last_exercise());
}

#[test]
fn reset_restores_defaults_and_is_idempotent() {
    let mut session = GameSession::new();
    session.start_game(seeded(5, DifficultyLevel::Easy, 2));
    session.answer_question(true);
    session.next_exercise().unwrap();
    session.finish_game();

    session.reset_game();
    let once = session.clone();
    session.reset_game();

    assert_eq!(session, once);
    assert!(session.exercises().is_empty());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.correct_count(), 0);
    assert_eq!(session.total_points(), 0);
    assert!(!session.is_active());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn empty_session_has_no_current_or_last_exercise() {
    let mut session = GameSession::new();
    session.start_game(Vec::new());
    assert!(session.current_exercise().is_none());
    assert!(!session.is_last_exercise());
    assert_eq!(session.progress(), 0.0);
}

// ── full flow ────────────────────────────────────────────────────────────────

#[test]
fn settings_to_results_flow() {
    let settings = GameSettings::from_json(r#"{"difficulty": "medium", "exercise_count": 5}"#)
        .unwrap();
    let batch = generate_exercises(settings.generation_request(Some(77))).unwrap();
    assert_valid_batch(&batch, 5, 1, 20);

    let mut session = GameSession::new();
    session.start_game(batch);
    let mut round = QuizRound::new(settings.feedback_delay());

    let mut answered = 0;
    loop {
        let ex = session.current_exercise().unwrap().clone();
        // Miss every other question.
        let pick = if answered % 2 == 0 {
            ex.correct_answer
        } else {
            ex.distractors().next().unwrap()
        };
        round.select_option(&mut session, pick).unwrap();
        answered += 1;

        assert_eq!(round.tick(&mut session, Duration::from_millis(1000)), Ok(RoundStatus::Waiting));
        match round.tick(&mut session, Duration::from_millis(500)).unwrap() {
            RoundStatus::Advanced => continue,
            RoundStatus::Finished => break,
            other => panic!("unexpected status {other:?}"),
        }
    }

    assert_eq!(answered, 5);
    let summary = ResultSummary::from_session(&session);
    assert_eq!(summary.correct, 3);
    assert_eq!(summary.percentage, 60);
    assert_eq!(summary.rating, Rating::VeryGood);

    assert_eq!(session.double_points(), Ok(60));
}

// ── properties ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every feasible request yields a batch satisfying all invariants.
    #[test]
    fn prop_feasible_batches_are_valid(
        seed in any::<u64>(),
        min in 1u32..20,
        width in 1u32..15,
        fraction in 0.0f64..=1.0,
    ) {
        let max = min + width;
        let n = u64::from(width) + 1;
        let available = n * (n + 1) / 2;
        let count = ((available as f64 * fraction) as usize).max(1);

        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generate_with_rng(&mut rng, count, min, max).unwrap();
        assert_valid_batch(&batch, count, min, max);
    }

    /// Property: points always equal ten per correct answer and never decrease.
    #[test]
    fn prop_points_track_correct_answers(answers in proptest::collection::vec(any::<bool>(), 0..40)) {
        let mut session = GameSession::new();
        session.start_game(seeded(5, DifficultyLevel::Easy, 4));
        let mut last = (0, 0);
        for correct in answers {
            session.answer_question(correct);
            let now = (session.correct_count(), session.total_points());
            prop_assert!(now.0 >= last.0 && now.1 >= last.1);
            prop_assert_eq!(now.1, now.0 * POINTS_PER_CORRECT);
            last = now;
        }
    }

    /// Property: progress is 100 * (k + 1) / N at cursor k.
    #[test]
    fn prop_progress_matches_cursor(n in 1usize..20, steps in 0usize..25) {
        let mut session = GameSession::new();
        session.start_game(seeded(n.min(20), DifficultyLevel::Hard, 9));
        let mut k = 0;
        for _ in 0..steps {
            if session.next_exercise().is_ok() {
                k += 1;
            }
        }
        prop_assert_eq!(session.current_index(), k);
        prop_assert!((session.progress() - 100.0 * (k + 1) as f64 / n as f64).abs() < 1e-9);
        prop_assert_eq!(session.is_last_exercise(), k == n - 1);
    }

    /// Property: start_game hands back exactly the batch it was given.
    #[test]
    fn prop_start_game_round_trips(seed in any::<u64>(), count in 1usize..=20) {
        let batch = seeded(count, DifficultyLevel::Medium, seed);
        let mut session = GameSession::new();
        session.start_game(batch.clone());
        prop_assert_eq!(session.exercises(), batch.as_slice());
    }
}
