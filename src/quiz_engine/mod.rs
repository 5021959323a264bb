//! Exercise engine: models, generation, and the static exercise bank.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: exercises, categories, difficulty, requests |
//! | `error`     | `GenerationError` and `BankError` |
//! | `helpers`   | Distractor and exercise builders shared by all generators |
//! | `generator` | `generate_exercises()` / `generate_with_rng()` with feasibility checks |
//! | `hybrid`    | Static + generated batches |
//! | `bank`      | Validated, JSON-loadable exercise repository |

pub mod bank;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod hybrid;
pub mod models;

pub use bank::ExerciseBank;
pub use error::{BankError, GenerationError};
pub use generator::{check_feasible, generate_exercises, generate_with_rng};
pub use hybrid::generate_hybrid;
pub use models::{
    Category, DifficultyLevel, Exercise, GenerationRequest, OperandKey, OperandRange,
};
