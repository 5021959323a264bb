//! In-memory bank of hand-written exercises.
//!
//! Banks are loaded from a JSON array of [`Exercise`] objects and validated
//! on construction, so every exercise served from a bank satisfies the same
//! option invariants as generated ones.

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::{
    error::BankError,
    helpers::OPTION_COUNT,
    models::{Category, Exercise},
};

#[derive(Debug, Clone, Default)]
pub struct ExerciseBank {
    exercises: Vec<Exercise>,
}

impl ExerciseBank {
    /// Build a bank, rejecting exercises whose options are malformed or whose
    /// ids collide.
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, BankError> {
        let mut ids = HashSet::with_capacity(exercises.len());
        for ex in &exercises {
            validate(ex)?;
            if !ids.insert(ex.id) {
                return Err(BankError::DuplicateId { id: ex.id });
            }
        }
        log::debug!("exercise bank loaded with {} exercises", exercises.len());
        Ok(ExerciseBank { exercises })
    }

    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let exercises: Vec<Exercise> = serde_json::from_str(json)?;
        Self::new(exercises)
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn by_category(&self, category: Category) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| e.category == category).collect()
    }

    /// Up to `count` exercises in random order.
    pub fn random_sample<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Exercise> {
        let mut picked = self.exercises.clone();
        picked.shuffle(rng);
        picked.truncate(count);
        picked
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

fn validate(ex: &Exercise) -> Result<(), BankError> {
    let unique: BTreeSet<u32> = ex.options.iter().copied().collect();
    if unique.len() != OPTION_COUNT {
        return Err(BankError::DuplicateOptions { id: ex.id });
    }
    if unique.contains(&0) {
        return Err(BankError::NonPositiveOption { id: ex.id });
    }
    if !unique.contains(&ex.correct_answer) {
        return Err(BankError::MissingAnswer { id: ex.id, answer: ex.correct_answer });
    }
    Ok(())
}
