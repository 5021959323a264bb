//! Quiz-screen controller: answer, show feedback, then move on after a delay.
//!
//! A `QuizRound` is owned by the quiz view. The pending advance lives in the
//! round's own [`Timeline`], so tearing the round down (or dropping it)
//! guarantees the session is never touched afterwards.

use std::time::Duration;

use crate::session::{
    error::RoundError,
    store::GameSession,
    timeline::{Timeline, TimerId},
};

/// Pause between answering and moving on.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    Continue,
}

/// What the player sees right after answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: u32 },
}

impl Feedback {
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Nothing answered yet.
    Idle,
    /// Feedback on screen, advance pending.
    Waiting,
    /// Moved on to the next exercise.
    Advanced,
    /// The last exercise was answered; the session is finished.
    Finished,
}

#[derive(Debug)]
pub struct QuizRound {
    timeline: Timeline<RoundEvent>,
    feedback_delay: Duration,
    pending: Option<TimerId>,
    selected: Option<u32>,
    /// Game the pending answer belongs to.
    answered_in: Option<u64>,
    torn_down: bool,
}

impl Default for QuizRound {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DELAY)
    }
}

impl QuizRound {
    pub fn new(feedback_delay: Duration) -> Self {
        QuizRound {
            timeline: Timeline::new(),
            feedback_delay,
            pending: None,
            selected: None,
            answered_in: None,
            torn_down: false,
        }
    }

    /// Answer the current exercise with `option` and schedule the advance.
    pub fn select_option(
        &mut self,
        session: &mut GameSession,
        option: u32,
    ) -> Result<Feedback, RoundError> {
        if self.torn_down {
            return Err(RoundError::TornDown);
        }
        if !session.is_active() {
            return Err(RoundError::Inactive);
        }
        if self.pending.is_some() {
            return Err(RoundError::AlreadyAnswered);
        }
        let exercise = session.current_exercise().ok_or(RoundError::NoExercise)?;
        let feedback = if exercise.is_correct(option) {
            Feedback::Correct
        } else {
            Feedback::Incorrect { correct_answer: exercise.correct_answer }
        };

        session.answer_question(feedback.is_correct());
        self.selected = Some(option);
        self.answered_in = Some(session.game());
        self.pending = Some(self.timeline.schedule(self.feedback_delay, RoundEvent::Continue));
        Ok(feedback)
    }

    /// Advance the round's clock by `dt`, applying the pending transition if
    /// it fell due.
    ///
    /// # Errors
    ///
    /// `Inactive` when the session was finished, reset or restarted while the
    /// feedback was showing; the session is left untouched.
    pub fn tick(
        &mut self,
        session: &mut GameSession,
        dt: Duration,
    ) -> Result<RoundStatus, RoundError> {
        if self.torn_down {
            return Err(RoundError::TornDown);
        }
        let fired = self.timeline.advance(dt);
        if fired.is_empty() {
            return Ok(if self.pending.is_some() { RoundStatus::Waiting } else { RoundStatus::Idle });
        }

        self.pending = None;
        self.selected = None;
        let answered_in = self.answered_in.take();
        if !session.is_active() || answered_in != Some(session.game()) {
            log::debug!("dropping stale advance for game {answered_in:?}");
            return Err(RoundError::Inactive);
        }
        if session.is_last_exercise() {
            session.finish_game();
            Ok(RoundStatus::Finished)
        } else {
            session.next_exercise()?;
            Ok(RoundStatus::Advanced)
        }
    }

    /// Cancel anything pending. The round refuses further input afterwards.
    pub fn teardown(&mut self) {
        self.timeline.cancel_all();
        self.pending = None;
        self.answered_in = None;
        self.torn_down = true;
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending transition, if any.
    pub fn remaining(&self) -> Option<Duration> {
        self.timeline.until_next()
    }

    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}
