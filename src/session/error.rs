//! Error types for the session store and quiz rounds.

use thiserror::Error;

/// Errors emitted by `GameSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no exercise after index {index} (session has {len})")]
    NoNextExercise { index: usize, len: usize },

    #[error("points can only be doubled once the game has finished")]
    NotFinished,

    #[error("points were already doubled for this game")]
    AlreadyDoubled,
}

/// Errors emitted by `QuizRound`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("no active game")]
    Inactive,

    #[error("no exercise to answer")]
    NoExercise,

    #[error("an answer was already given for this exercise")]
    AlreadyAnswered,

    #[error("round has been torn down")]
    TornDown,

    #[error(transparent)]
    Session(#[from] SessionError),
}
