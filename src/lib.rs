//! # arith_drill_gen
//!
//! Offline, seedable arithmetic drill generator and play-session state for a
//! children's addition game.
//!
//! ## How it works
//!
//! 1. Build a [`GenerationRequest`] from a count, a [`DifficultyLevel`]
//!    (easy `1-10`, medium `1-20`, hard `1-50`) and an optional RNG seed.
//! 2. Call [`generate_exercises`]: the engine draws operand pairs until it has
//!    the requested number of distinct (order-independent) pairs, and gives
//!    every exercise three nearby distractor options. Requests that could
//!    never complete are rejected with a [`GenerationError`] instead of
//!    looping forever.
//! 3. Hand the batch to a [`GameSession`], answer through a [`QuizRound`]
//!    (which waits out the feedback delay before moving on), and read the
//!    [`ResultSummary`] at the end.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)`, or call
//!   [`generate_with_rng`] with your own RNG, to reproduce a batch exactly.
//! - **Explicit state**: the session is a plain value you own; there is no
//!   global store.
//! - **Cancelable timers**: delayed transitions run on a caller-driven
//!   [`Timeline`], so tearing a view down drops its pending work.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use arith_drill_gen::{
//!     generate_exercises, DifficultyLevel, GameSession, GenerationRequest, QuizRound,
//!     ResultSummary, RoundStatus,
//! };
//!
//! let batch = generate_exercises(
//!     GenerationRequest::new(5, DifficultyLevel::Easy).with_seed(42),
//! ).unwrap();
//!
//! let mut session = GameSession::new();
//! session.start_game(batch);
//! let mut round = QuizRound::default();
//!
//! loop {
//!     let answer = session.current_exercise().unwrap().correct_answer;
//!     round.select_option(&mut session, answer).unwrap();
//!     if round.tick(&mut session, Duration::from_millis(1500)).unwrap() == RoundStatus::Finished {
//!         break;
//!     }
//! }
//!
//! let summary = ResultSummary::from_session(&session);
//! assert_eq!(summary.points, 50);
//! println!("{summary}");
//! ```

pub mod quiz_engine;
pub mod session;
pub mod settings;

// Convenience re-exports so callers can use `arith_drill_gen::generate_exercises`
// directly without reaching into submodules.
pub use quiz_engine::{
    check_feasible, generate_exercises, generate_hybrid, generate_with_rng, BankError, Category,
    DifficultyLevel, Exercise, ExerciseBank, GenerationError, GenerationRequest, OperandKey,
    OperandRange,
};
pub use session::{
    Feedback, GameSession, QuizRound, Rating, ResultSummary, RoundError, RoundStatus,
    SessionError, SessionPhase, Timeline, TimerId, POINTS_PER_CORRECT,
};
pub use settings::{GameSettings, SettingsError, ALLOWED_EXERCISE_COUNTS};

#[cfg(test)]
mod tests;
