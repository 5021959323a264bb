//! Play-through state and the timed flow around it.
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `store`    | `GameSession`: exercises, cursor, counters, phase |
//! | `timeline` | Cancelable deferred events on a logical clock |
//! | `round`    | Quiz-screen controller: answer, feedback delay, advance/finish |
//! | `results`  | Accuracy and rating for the results screen |
//! | `error`    | `SessionError`, `RoundError` |

pub mod error;
pub mod results;
pub mod round;
pub mod store;
pub mod timeline;

pub use error::{RoundError, SessionError};
pub use results::{Rating, ResultSummary};
pub use round::{Feedback, QuizRound, RoundStatus, DEFAULT_FEEDBACK_DELAY};
pub use store::{GameSession, SessionPhase, POINTS_PER_CORRECT};
pub use timeline::{Timeline, TimerId};
