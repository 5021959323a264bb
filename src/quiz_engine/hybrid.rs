//! Hybrid mode: mix a static exercise list with freshly generated ones.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::{
    error::GenerationError,
    generator::{check_feasible, generate_from},
    models::{Exercise, OperandRange},
};

/// Build a batch of `total` exercises from `static_exercises`, topping up with
/// generated additions in `range` when the static list is too short.
///
/// When the static list already covers `total`, it is shuffled and truncated.
/// Otherwise the shortfall is generated (ids continue after the largest static
/// id, so the merged batch has unique ids) and the combined list is shuffled.
pub fn generate_hybrid<R: Rng>(
    rng: &mut R,
    static_exercises: &[Exercise],
    total: usize,
    range: OperandRange,
) -> Result<Vec<Exercise>, GenerationError> {
    let mut batch: Vec<Exercise> = static_exercises.to_vec();
    batch.shuffle(rng);

    if total <= batch.len() {
        batch.truncate(total);
        log::debug!("hybrid batch served {} static exercises", total);
        return Ok(batch);
    }

    let extra = total - batch.len();
    check_feasible(extra, range)?;
    let first_id = batch.iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let generated = generate_from(rng, extra, range, first_id);
    log::debug!(
        "hybrid batch: {} static + {} generated",
        batch.len(),
        generated.len()
    );

    batch.extend(generated);
    batch.shuffle(rng);
    Ok(batch)
}
