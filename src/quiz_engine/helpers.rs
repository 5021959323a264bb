//! Shared builder functions used by the generator and hybrid mode.
//!
//! ## RNG ordering
//!
//! For each exercise the generator draws the two operands first, then the
//! distractor offsets, then the option shuffle. Changing that order changes
//! every seeded batch and breaks the determinism tests.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::models::{tier_for, Category, Exercise};

/// Largest distance between a distractor and the correct answer.
pub const DISTRACTOR_SPREAD: i64 = 3;

/// Options per exercise, correct answer included.
pub const OPTION_COUNT: usize = 4;

/// Count the distractor candidates available for `answer` when options are
/// capped at `2 * max_operand`.
pub fn distractor_candidates(answer: u32, max_operand: u32) -> usize {
    let answer = i64::from(answer);
    let cap = 2 * i64::from(max_operand);
    (-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD)
        .filter(|&off| off != 0)
        .map(|off| answer + off)
        .filter(|&c| c > 0 && c <= cap)
        .count()
}

/// Build the four shuffled options for `answer`.
///
/// Offsets are drawn uniformly from `[-3, 3]` until three distinct valid
/// distractors are collected. Callers must ensure `distractor_candidates`
/// returns at least 3, otherwise this never terminates.
pub fn build_options<R: Rng>(rng: &mut R, answer: u32, max_operand: u32) -> [u32; OPTION_COUNT] {
    let cap = 2 * i64::from(max_operand);
    let mut set = BTreeSet::new();
    set.insert(answer);

    while set.len() < OPTION_COUNT {
        let offset = rng.gen_range(-DISTRACTOR_SPREAD..=DISTRACTOR_SPREAD);
        let candidate = i64::from(answer) + offset;
        if candidate > 0 && candidate != i64::from(answer) && candidate <= cap {
            if let Ok(c) = u32::try_from(candidate) {
                set.insert(c);
            }
        }
    }

    let mut options: Vec<u32> = set.into_iter().collect();
    options.shuffle(rng);
    [options[0], options[1], options[2], options[3]]
}

/// Question text for an addition.
pub fn addition_question(a: u32, b: u32) -> String {
    format!("What is {a} + {b}?")
}

/// Assemble one addition exercise.
pub fn addition(id: u32, a: u32, b: u32, options: [u32; OPTION_COUNT]) -> Exercise {
    let correct_answer = a + b;
    Exercise {
        id,
        operands: [a, b],
        question: addition_question(a, b),
        correct_answer,
        options,
        category: Category::Addition,
        difficulty: tier_for(correct_answer),
    }
}
