use serde::{Deserialize, Serialize};

use crate::quiz_engine::Exercise;
use crate::session::error::SessionError;

/// Points awarded per correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Never started, or reset.
    #[default]
    Idle,
    Active,
    /// Counters and exercises kept for the results view.
    Finished,
}

/// State of one play-through. Construct one per app and hand it to whatever
/// drives the screens; `reset_game` clears the play-through back to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    exercises: Vec<Exercise>,
    current_index: usize,
    correct_count: u32,
    total_points: u32,
    phase: SessionPhase,
    points_doubled: bool,
    /// Bumped by every `start_game`; kept across resets.
    game: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_game(&mut self, exercises: Vec<Exercise>) {
        log::info!("starting game with {} exercises", exercises.len());
        *self = GameSession {
            exercises,
            phase: SessionPhase::Active,
            game: self.game + 1,
            ..GameSession::default()
        };
    }

    /// Record an answer. Only correct answers change the counters.
    pub fn answer_question(&mut self, is_correct: bool) {
        if is_correct {
            self.correct_count += 1;
            self.total_points += POINTS_PER_CORRECT;
        }
    }

    /// Move to the next exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoNextExercise` and leaves the cursor untouched
    /// when already on (or past) the last exercise.
    pub fn next_exercise(&mut self) -> Result<(), SessionError> {
        if self.current_index + 1 >= self.exercises.len() {
            return Err(SessionError::NoNextExercise {
                index: self.current_index,
                len: self.exercises.len(),
            });
        }
        self.current_index += 1;
        Ok(())
    }

    pub fn finish_game(&mut self) {
        log::info!(
            "game finished: {}/{} correct, {} points",
            self.correct_count,
            self.exercises.len(),
            self.total_points
        );
        self.phase = SessionPhase::Finished;
    }

    pub fn reset_game(&mut self) {
        *self = GameSession { game: self.game, ..GameSession::default() };
    }

    /// Double the final score once, after the game has finished.
    ///
    /// # Errors
    ///
    /// `NotFinished` outside the finished phase, `AlreadyDoubled` on a second call.
    pub fn double_points(&mut self) -> Result<u32, SessionError> {
        if self.phase != SessionPhase::Finished {
            return Err(SessionError::NotFinished);
        }
        if self.points_doubled {
            return Err(SessionError::AlreadyDoubled);
        }
        self.points_doubled = true;
        self.total_points *= 2;
        log::info!("bonus applied, total points now {}", self.total_points);
        Ok(self.total_points)
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.current_index)
    }

    /// Percentage of the batch reached, counting the current exercise.
    /// Zero for an empty session.
    pub fn progress(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.exercises.len() as f64 * 100.0
    }

    /// False on an empty session: there is no exercise to be the last one.
    pub fn is_last_exercise(&self) -> bool {
        !self.exercises.is_empty() && self.current_index + 1 >= self.exercises.len()
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn points_doubled(&self) -> bool {
        self.points_doubled
    }

    /// Number of games started on this session, including the current one.
    pub fn game(&self) -> u64 {
        self.game
    }
}
