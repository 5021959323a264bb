//! Error types for exercise generation and the static exercise bank.

use thiserror::Error;

use crate::quiz_engine::models::OperandRange;

/// Errors emitted by the exercise generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("invalid operand range {range}: operands must be positive and min <= max")]
    InvalidRange { range: OperandRange },

    #[error("operand range {range} is too large: sums must fit in 32 bits")]
    RangeTooLarge { range: OperandRange },

    #[error("cannot generate {requested} distinct exercises from {range}: only {available} operand pairs exist")]
    Infeasible { requested: usize, available: u64, range: OperandRange },

    #[error("operand range {range} is too narrow to produce three distractors")]
    RangeTooNarrow { range: OperandRange },
}

/// Errors emitted while loading or validating a static exercise bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("exercise {id}: options must be four distinct values")]
    DuplicateOptions { id: u32 },

    #[error("exercise {id}: correct answer {answer} is not among the options")]
    MissingAnswer { id: u32, answer: u32 },

    #[error("exercise {id}: options must be positive")]
    NonPositiveOption { id: u32 },

    #[error("duplicate exercise id {id}")]
    DuplicateId { id: u32 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
