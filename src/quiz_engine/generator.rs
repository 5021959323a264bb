use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::{
    error::GenerationError,
    helpers::{self, OPTION_COUNT},
    models::{Exercise, GenerationRequest, OperandKey, OperandRange},
};

/// Reject requests that could never complete.
pub fn check_feasible(count: usize, range: OperandRange) -> Result<(), GenerationError> {
    if range.min == 0 || range.min > range.max {
        return Err(GenerationError::InvalidRange { range });
    }
    // Every sum and the 2 * max option cap must fit in u32.
    if range.max > u32::MAX / 2 {
        return Err(GenerationError::RangeTooLarge { range });
    }
    let available = range.distinct_pairs();
    if count as u64 > available {
        return Err(GenerationError::Infeasible { requested: count, available, range });
    }
    // Only the smallest answer can run short of distractors; the largest
    // always has three below it once max >= 2.
    if helpers::distractor_candidates(2 * range.min, range.max) < OPTION_COUNT - 1 {
        return Err(GenerationError::RangeTooNarrow { range });
    }
    Ok(())
}

/// Generate `count` addition exercises with operands in `[min, max]`, drawing
/// from the supplied RNG.
///
/// No two exercises share an unordered operand pair. Ids run from 1 in
/// generation order.
pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    count: usize,
    min: u32,
    max: u32,
) -> Result<Vec<Exercise>, GenerationError> {
    let range = OperandRange::new(min, max);
    if let Err(e) = check_feasible(count, range) {
        log::warn!("rejected generation request: {e}");
        return Err(e);
    }
    Ok(generate_from(rng, count, range, 1))
}

/// Core loop. Assumes `check_feasible` passed.
pub(crate) fn generate_from<R: Rng>(
    rng: &mut R,
    count: usize,
    range: OperandRange,
    first_id: u32,
) -> Vec<Exercise> {
    let mut exercises = Vec::with_capacity(count);
    let mut used: HashSet<OperandKey> = HashSet::with_capacity(count);
    let mut draws = 0u64;
    let mut id = first_id;

    while exercises.len() < count {
        let a = rng.gen_range(range.min..=range.max);
        let b = rng.gen_range(range.min..=range.max);
        draws += 1;
        if !used.insert(OperandKey::new(a, b)) {
            continue;
        }
        let options = helpers::build_options(rng, a + b, range.max);
        exercises.push(helpers::addition(id, a, b, options));
        id += 1;
    }

    log::debug!(
        "generated {} exercises in {} ({} operand draws)",
        exercises.len(),
        range,
        draws
    );
    exercises
}

/// Entry point: seeds an RNG from the request and generates the batch.
pub fn generate_exercises(request: GenerationRequest) -> Result<Vec<Exercise>, GenerationError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with_rng(&mut rng, request.count, request.range.min, request.range.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausting_every_pair_terminates() {
        let mut rng = StdRng::seed_from_u64(11);
        let batch = generate_with_rng(&mut rng, 15, 1, 5).unwrap();
        let keys: HashSet<OperandKey> = batch.iter().map(Exercise::operand_key).collect();
        assert_eq!(keys.len(), 15);
    }

    #[test]
    fn one_more_than_available_is_infeasible() {
        let err = check_feasible(16, OperandRange::new(1, 5)).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Infeasible { requested: 16, available: 15, range: OperandRange::new(1, 5) }
        );
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(
            check_feasible(1, OperandRange::new(0, 5)),
            Err(GenerationError::InvalidRange { .. })
        ));
        assert!(matches!(
            check_feasible(1, OperandRange::new(6, 5)),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn single_value_range_of_one_is_too_narrow() {
        assert_eq!(
            check_feasible(1, OperandRange::new(1, 1)),
            Err(GenerationError::RangeTooNarrow { range: OperandRange::new(1, 1) })
        );
        assert!(check_feasible(3, OperandRange::new(1, 2)).is_ok());
    }

    #[test]
    fn ranges_whose_sums_overflow_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let huge = OperandRange::new(3_000_000_000, 3_000_000_000);
        assert_eq!(
            generate_with_rng(&mut rng, 1, huge.min, huge.max),
            Err(GenerationError::RangeTooLarge { range: huge })
        );
        assert!(matches!(
            generate_with_rng(&mut rng, 3, 1, 4_000_000_000),
            Err(GenerationError::RangeTooLarge { .. })
        ));

        let edge = u32::MAX / 2;
        let batch = generate_with_rng(&mut rng, 3, edge - 1, edge).unwrap();
        assert!(batch.iter().all(|e| e.correct_answer <= u32::MAX - 1));
        assert!(matches!(
            check_feasible(1, OperandRange::new(edge, edge + 1)),
            Err(GenerationError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn zero_count_yields_empty_batch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_with_rng(&mut rng, 0, 1, 10).unwrap().is_empty());
    }
}
